use async_trait::async_trait;

use crate::domain::bag::errors::BagError;
use crate::domain::bag::model::Bag;

#[async_trait]
pub trait GetAllBagsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Bag>, BagError>;
}
