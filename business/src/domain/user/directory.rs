use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserName;

use super::model::User;

/// Lookup port for user accounts.
///
/// Returns `RepositoryError::NotFound` when no account has the given name.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_user_name(&self, user_name: &UserName) -> Result<User, RepositoryError>;
}
