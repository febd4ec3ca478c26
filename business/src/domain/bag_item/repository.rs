use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::BagItem;

/// Read port for bag items. Writes go through `BagRepository::save`.
#[async_trait]
pub trait BagItemRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<BagItem, RepositoryError>;
    async fn get_by_bag_id(&self, bag_id: Uuid) -> Result<Vec<BagItem>, RepositoryError>;
}
