use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::model::Bag;

pub struct GetBagByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetBagByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetBagByIdParams) -> Result<Bag, BagError>;
}
