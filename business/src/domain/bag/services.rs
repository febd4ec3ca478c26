use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserName;

use super::errors::BagError;
use super::model::Bag;

/// Bag lifecycle shared by the bag and bag item use cases.
#[async_trait]
pub trait BagManager: Send + Sync {
    /// Returns the user's bag, creating an empty one on first access.
    async fn get_or_create_bag(&self, user_name: &UserName) -> Result<Bag, BagError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Bag, BagError>;
    /// Recomputes the bag totals from its items and persists the aggregate.
    async fn recalculate_total(&self, bag: &mut Bag) -> Result<(), BagError>;
}
