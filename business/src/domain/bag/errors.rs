#[derive(Debug, thiserror::Error)]
pub enum BagError {
    #[error("bag.not_found")]
    NotFound,
    #[error("bag.user_not_found")]
    UserNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
