use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;

#[derive(Debug)]
pub struct DeleteBagItemParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteBagItemUseCase: Send + Sync {
    /// Removes the item and returns its state from just before removal.
    async fn execute(&self, params: DeleteBagItemParams) -> Result<BagItem, BagItemError>;
}
