use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;

pub struct UpdateBagItemQuantityParams {
    pub id: Uuid,
    /// Zero or negative removes the item.
    pub quantity: i32,
}

#[async_trait]
pub trait UpdateBagItemQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateBagItemQuantityParams)
    -> Result<BagItem, BagItemError>;
}
