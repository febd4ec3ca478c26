use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;
use uuid::Uuid;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::model::Bag;
use crate::domain::bag::repository::BagRepository;
use crate::domain::bag::services::BagManager;
use crate::domain::bag_item::model::BagItem;
use crate::domain::bag_item::repository::BagItemRepository;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserName;
use crate::domain::user::directory::UserDirectory;
use crate::domain::user::model::User;

mock! {
    pub BagRepo {}

    #[async_trait]
    impl BagRepository for BagRepo {
        async fn get_all(&self) -> Result<Vec<Bag>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Bag, RepositoryError>;
        async fn find_by_user_name(&self, user_name: &UserName) -> Result<Option<Bag>, RepositoryError>;
        async fn create_if_absent(&self, bag: &Bag) -> Result<Bag, RepositoryError>;
        async fn save(&self, bag: &Bag) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub BagItemRepo {}

    #[async_trait]
    impl BagItemRepository for BagItemRepo {
        async fn get_by_id(&self, id: Uuid) -> Result<BagItem, RepositoryError>;
        async fn get_by_bag_id(&self, bag_id: Uuid) -> Result<Vec<BagItem>, RepositoryError>;
    }
}

mock! {
    pub UserDir {}

    #[async_trait]
    impl UserDirectory for UserDir {
        async fn find_by_user_name(&self, user_name: &UserName) -> Result<User, RepositoryError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalog for Catalog {
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub BagMgr {}

    #[async_trait]
    impl BagManager for BagMgr {
        async fn get_or_create_bag(&self, user_name: &UserName) -> Result<Bag, BagError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Bag, BagError>;
        async fn recalculate_total(&self, bag: &mut Bag) -> Result<(), BagError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn user(name: &str) -> User {
    User::from_repository(Uuid::new_v4(), UserName::new(name))
}

pub fn product(name: &str, price: &str) -> Product {
    Product::from_repository(
        Uuid::new_v4(),
        name.to_string(),
        BigDecimal::from_str(price).unwrap(),
    )
}

pub fn money(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).unwrap()
}
