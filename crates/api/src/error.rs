//! API error responses.
//!
//! Every failing route answers with `{"error": CODE, "message": reason}`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use myfinances_core::entry::{EntryError, ValidationError};
use myfinances_core::user::UserError;
use myfinances_shared::AppError;
use serde_json::json;
use tracing::{error, warn};

/// An error ready to be rendered as a JSON response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    /// Builds an error from an application error and a specific code.
    #[must_use]
    pub fn new(err: &AppError, code: &'static str) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = if err.is_server_error() {
            "An internal error occurred".to_string()
        } else {
            err.message().to_string()
        };

        Self {
            status,
            code,
            message,
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Error code of the response body.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl From<EntryError> for ApiError {
    fn from(err: EntryError) -> Self {
        let code = err.error_code();
        let app = AppError::from(err);
        log(&app, code);
        Self::new(&app, code)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        EntryError::from(err).into()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let code = err.error_code();
        let app = AppError::from(err);
        log(&app, code);
        Self::new(&app, code)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Anything but a missing content type is a malformed body
        let status = match rejection {
            JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            _ => StatusCode::BAD_REQUEST,
        };
        rejected(status, "INVALID_BODY", rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        rejected(StatusCode::BAD_REQUEST, "INVALID_PATH", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        rejected(StatusCode::BAD_REQUEST, "INVALID_QUERY", rejection.body_text())
    }
}

fn rejected(status: StatusCode, code: &'static str, message: String) -> ApiError {
    warn!(code, %message, "Request rejected");
    ApiError {
        status,
        code,
        message,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "error": self.code,
                "message": self.message,
            })),
        )
            .into_response()
    }
}

fn log(err: &AppError, code: &'static str) {
    if err.is_server_error() {
        error!(error = %err, code, "Request failed");
    } else {
        warn!(error = %err, code, "Request rejected");
    }
}
