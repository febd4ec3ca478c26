use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::model::Bag;
use crate::domain::bag::services::BagManager;
use crate::domain::bag::use_cases::get_or_create::{GetOrCreateBagParams, GetOrCreateBagUseCase};
use crate::domain::logger::Logger;

pub struct GetOrCreateBagUseCaseImpl {
    pub bag_manager: Arc<dyn BagManager>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrCreateBagUseCase for GetOrCreateBagUseCaseImpl {
    async fn execute(&self, params: GetOrCreateBagParams) -> Result<Bag, BagError> {
        self.logger
            .info(&format!("Fetching bag for user: {}", params.user_name));

        let bag = self.bag_manager.get_or_create_bag(&params.user_name).await?;

        self.logger.info(&format!(
            "Bag {} has {} items",
            bag.id,
            bag.items().len()
        ));
        Ok(bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserName;
    use crate::test_support::{MockBagMgr, mock_logger, user};

    #[tokio::test]
    async fn should_return_same_bag_on_repeated_calls() {
        let bag = Bag::new(&user("alice"));
        let bag_id = bag.id;

        let mut mock_manager = MockBagMgr::new();
        mock_manager
            .expect_get_or_create_bag()
            .times(2)
            .withf(|name| name.as_str() == "alice")
            .returning(move |_| Ok(bag.clone()));

        let use_case = GetOrCreateBagUseCaseImpl {
            bag_manager: Arc::new(mock_manager),
            logger: mock_logger(),
        };

        let first = use_case
            .execute(GetOrCreateBagParams {
                user_name: UserName::new("alice"),
            })
            .await
            .unwrap();
        let second = use_case
            .execute(GetOrCreateBagParams {
                user_name: UserName::new("alice"),
            })
            .await
            .unwrap();

        assert_eq!(first.id, bag_id);
        assert_eq!(second.id, bag_id);
    }

    #[tokio::test]
    async fn should_propagate_user_not_found() {
        let mut mock_manager = MockBagMgr::new();
        mock_manager
            .expect_get_or_create_bag()
            .returning(|_| Err(BagError::UserNotFound));

        let use_case = GetOrCreateBagUseCaseImpl {
            bag_manager: Arc::new(mock_manager),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrCreateBagParams {
                user_name: UserName::new("ghost"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), BagError::UserNotFound));
    }
}
