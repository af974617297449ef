//! API Response wrapper

use axum::{http::StatusCode, Json};
use chrono::Utc;
use menu_core::DomainError;
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

pub type ApiErrorResponse = (StatusCode, Json<ApiResponse<()>>);

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Maps a domain failure onto a status code and error envelope.
///
/// Broken menu data is a server-side defect, not a client error.
pub fn domain_error_response(err: &DomainError) -> ApiErrorResponse {
    let (status, code) = match err {
        DomainError::UnknownRoute(_) => (StatusCode::INTERNAL_SERVER_ERROR, "UNKNOWN_ROUTE"),
        DomainError::MalformedLink(_) => (StatusCode::INTERNAL_SERVER_ERROR, "MALFORMED_LINK"),
        DomainError::MenuSlugAlreadyExists(_) => (StatusCode::CONFLICT, "MENU_SLUG_EXISTS"),
        DomainError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        DomainError::DatabaseError(_) => (StatusCode::SERVICE_UNAVAILABLE, "DATABASE_ERROR"),
    };
    if status.is_server_error() {
        error!("{} ({})", err, code);
    }
    (status, Json(ApiResponse::error(code, &err.to_string())))
}
