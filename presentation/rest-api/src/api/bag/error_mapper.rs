use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::bag::errors::BagError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BagError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BagError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "bag.not_found"),
            BagError::UserNotFound => (StatusCode::NOT_FOUND, "NotFound", "bag.user_not_found"),
            BagError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_user_to_not_found() {
        let (status, json) = BagError::UserNotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json.0.name, "NotFound");
        assert_eq!(json.0.message, "bag.user_not_found");
    }

    #[test]
    fn should_hide_storage_details_behind_internal_error() {
        let (status, json) =
            BagError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
