use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Lookup port for the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
}
