use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::bag::errors::BagError;

pub const BAG_DELETED_MESSAGE: &str = "My Bag deleted successfully.";

pub struct DeleteBagParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteBagUseCase: Send + Sync {
    /// Removes the bag and its items, returning a confirmation message.
    async fn execute(&self, params: DeleteBagParams) -> Result<String, BagError>;
}
