use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use potluck_core::DomainError;

/// Map a domain failure to its HTTP status + `{"error": ...}` body.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::CannotPartyAlone => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Gone(_) => StatusCode::GONE,
        DomainError::NotInvitedGuest { .. } => StatusCode::UNAUTHORIZED,
        DomainError::DuplicateContribution { .. } => StatusCode::BAD_REQUEST,
        DomainError::ItemNotInFoodList { .. } => StatusCode::BAD_REQUEST,
    };

    json_error(status, err.to_string())
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
