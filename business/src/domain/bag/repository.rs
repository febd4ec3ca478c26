use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserName;

use super::model::Bag;

/// Storage port for the bag aggregate.
///
/// `save` writes the bag and its whole item collection as one unit: items
/// missing from `bag.items()` are deleted, the rest are inserted or updated.
#[async_trait]
pub trait BagRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Bag>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Bag, RepositoryError>;
    async fn find_by_user_name(&self, user_name: &UserName)
    -> Result<Option<Bag>, RepositoryError>;
    /// Inserts `bag` unless its owner already has one, and returns the stored bag.
    async fn create_if_absent(&self, bag: &Bag) -> Result<Bag, RepositoryError>;
    async fn save(&self, bag: &Bag) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
