use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;

pub struct GetBagItemsByBagIdParams {
    pub bag_id: Uuid,
}

#[async_trait]
pub trait GetBagItemsByBagIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetBagItemsByBagIdParams,
    ) -> Result<Vec<BagItem>, BagItemError>;
}
