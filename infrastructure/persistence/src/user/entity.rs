use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserName;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub user_name: String,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(self.id, UserName::new(self.user_name))
    }
}
