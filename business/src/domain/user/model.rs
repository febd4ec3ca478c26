use uuid::Uuid;

use crate::domain::shared::value_objects::UserName;

/// Account owned by the user-management subsystem. Read-only here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub user_name: UserName,
}

impl User {
    pub fn from_repository(id: Uuid, user_name: UserName) -> Self {
        Self { id, user_name }
    }
}
