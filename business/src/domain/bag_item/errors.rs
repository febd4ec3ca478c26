use crate::domain::bag::errors::BagError;

#[derive(Debug, thiserror::Error)]
pub enum BagItemError {
    #[error("bag_item.not_found")]
    NotFound,
    #[error("bag_item.product_not_found")]
    ProductNotFound,
    #[error("bag_item.invalid_quantity")]
    InvalidQuantity,
    #[error(transparent)]
    Bag(#[from] BagError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
