use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bag_item::errors::BagItemError;
use crate::domain::bag_item::model::BagItem;
use crate::domain::shared::value_objects::UserName;

pub struct AddBagItemParams {
    pub user_name: UserName,
    pub product_id: Uuid,
    pub quantity: i32,
}

#[async_trait]
pub trait AddBagItemUseCase: Send + Sync {
    async fn execute(&self, params: AddBagItemParams) -> Result<BagItem, BagItemError>;
}
