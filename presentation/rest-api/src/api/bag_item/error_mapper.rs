use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::bag_item::errors::BagItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BagItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self {
            BagItemError::Bag(err) => return err.into_error_response(),
            BagItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "bag_item.not_found"),
            BagItemError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "bag_item.product_not_found",
            ),
            BagItemError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "bag_item.invalid_quantity",
            ),
            BagItemError::Repository(_) => (
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
