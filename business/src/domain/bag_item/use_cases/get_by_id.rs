use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;

pub struct GetBagItemByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetBagItemByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetBagItemByIdParams) -> Result<BagItem, BagItemError>;
}
