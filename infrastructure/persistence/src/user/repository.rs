use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserName;
use business::domain::user::directory::UserDirectory;
use business::domain::user::model::User;

use super::entity::UserEntity;
use crate::db::query_error;

pub struct UserDirectoryPostgres {
    pool: PgPool,
}

impl UserDirectoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for UserDirectoryPostgres {
    async fn find_by_user_name(&self, user_name: &UserName) -> Result<User, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT id, user_name FROM users WHERE user_name = $1",
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
