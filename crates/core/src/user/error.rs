//! User errors.

use myfinances_shared::{AppError, types::UserId};
use thiserror::Error;

use crate::auth::PasswordError;

/// Errors from registration and authentication.
#[derive(Debug, Error)]
pub enum UserError {
    /// Name, email or password is blank.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// Another user already registered this email.
    #[error("email already registered")]
    EmailTaken,

    /// No user has this id.
    #[error("user not found")]
    NotFound(UserId),

    /// Unknown email or wrong password. The two cases are not told apart.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Store error.
    #[error("store error: {0}")]
    Store(String),
}

impl UserError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::NotFound(_) => "USER_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Password(_) => "PASSWORD_ERROR",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::MissingField(_) => Self::Validation(message),
            UserError::EmailTaken => Self::Conflict(message),
            UserError::NotFound(_) => Self::NotFound(message),
            UserError::InvalidCredentials => Self::Unauthorized(message),
            UserError::Password(_) => Self::Internal(message),
            UserError::Store(_) => Self::Database(message),
        }
    }
}
