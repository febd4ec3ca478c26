use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::model::Bag;
use crate::domain::bag::repository::BagRepository;
use crate::domain::bag::services::BagManager;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserName;
use crate::domain::user::directory::UserDirectory;

pub struct BagManagerImpl {
    pub repository: Arc<dyn BagRepository>,
    pub user_directory: Arc<dyn UserDirectory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BagManager for BagManagerImpl {
    async fn get_or_create_bag(&self, user_name: &UserName) -> Result<Bag, BagError> {
        if let Some(bag) = self.repository.find_by_user_name(user_name).await? {
            return Ok(bag);
        }

        let user = self
            .user_directory
            .find_by_user_name(user_name)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => BagError::UserNotFound,
                other => BagError::Repository(other),
            })?;

        let bag = self.repository.create_if_absent(&Bag::new(&user)).await?;

        self.logger
            .info(&format!("Bag {} ready for user {}", bag.id, user_name));
        Ok(bag)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Bag, BagError> {
        self.repository.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => BagError::NotFound,
            other => BagError::Repository(other),
        })
    }

    async fn recalculate_total(&self, bag: &mut Bag) -> Result<(), BagError> {
        bag.recalculate_total();
        self.repository.save(bag).await?;

        self.logger.debug(&format!(
            "Bag {} totals: {} items, {}",
            bag.id,
            bag.total_items(),
            bag.total_price()
        ));
        Ok(())
    }
}
