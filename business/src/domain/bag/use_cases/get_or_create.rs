use async_trait::async_trait;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::model::Bag;
use crate::domain::shared::value_objects::UserName;

pub struct GetOrCreateBagParams {
    pub user_name: UserName,
}

#[async_trait]
pub trait GetOrCreateBagUseCase: Send + Sync {
    async fn execute(&self, params: GetOrCreateBagParams) -> Result<Bag, BagError>;
}
