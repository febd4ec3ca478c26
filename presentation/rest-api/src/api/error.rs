use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    /// 400 body for malformed identifiers and payloads.
    pub fn validation(message: &str) -> Json<Self> {
        Json(Self {
            name: "ValidationError".to_string(),
            message: message.to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Parses a path or body identifier, answering 400 with `message` when malformed.
pub fn parse_uuid(raw: &str, message: &str) -> Result<uuid::Uuid, Json<ErrorResponse>> {
    uuid::Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_malformed_uuid() {
        let err = parse_uuid("not-a-uuid", "bag.invalid_id").unwrap_err();

        assert_eq!(err.0.name, "ValidationError");
        assert_eq!(err.0.message, "bag.invalid_id");
    }

    #[test]
    fn should_accept_hyphenated_uuid() {
        let id = uuid::Uuid::new_v4();

        assert_eq!(parse_uuid(&id.to_string(), "bag.invalid_id").unwrap(), id);
    }
}
