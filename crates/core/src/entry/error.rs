//! Entry error types.
//!
//! `ValidationError` carries the business-rule messages shown to end users;
//! they must stay stable. `EntryError` adds the precondition, lookup and
//! store failures of the ledger operations.

use myfinances_shared::AppError;
use myfinances_shared::types::{EntryId, UserId};
use thiserror::Error;

/// Entry content that breaks a business rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Description is missing or blank.
    #[error("invalid description")]
    InvalidDescription,

    /// Month is missing or outside 1-12.
    #[error("invalid month")]
    InvalidMonth,

    /// Year is missing or not four digits.
    #[error("invalid year")]
    InvalidYear,

    /// Owner reference is missing.
    #[error("missing user")]
    MissingUser,

    /// Amount is missing, zero or negative.
    #[error("invalid amount")]
    InvalidAmount,

    /// Kind is missing.
    #[error("missing entry kind")]
    MissingKind,

    /// A status string that is not PENDING, SETTLED or CANCELLED.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// A kind string that is not INCOME or EXPENSE.
    #[error("invalid kind: {0}")]
    InvalidKind(String),
}

impl ValidationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDescription => "INVALID_DESCRIPTION",
            Self::InvalidMonth => "INVALID_MONTH",
            Self::InvalidYear => "INVALID_YEAR",
            Self::MissingUser => "MISSING_USER",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::MissingKind => "MISSING_ENTRY_KIND",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidKind(_) => "INVALID_KIND",
        }
    }
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum EntryError {
    // ========== Validation Errors ==========
    /// Entry content failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ========== Precondition Errors ==========
    /// Update or delete was called on an entry that was never persisted.
    #[error("missing id")]
    MissingId,

    /// A status change targeted an entry that does not resolve to a stored one.
    #[error("entry reference could not be resolved")]
    UnresolvedEntry,

    // ========== Lookup Errors ==========
    /// Entry not found.
    #[error("entry not found")]
    NotFound(EntryId),

    /// The owner reference points to no known user.
    #[error("user not found")]
    UserNotFound(UserId),

    // ========== Store Errors ==========
    /// The entry store failed.
    #[error("store error: {0}")]
    Store(String),
}

impl EntryError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::MissingId => "MISSING_ID",
            Self::UnresolvedEntry => "UNRESOLVED_ENTRY",
            Self::NotFound(_) => "ENTRY_NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - rejected content
            Self::Validation(_) => 400,

            // 422 Unprocessable - operation called without a usable target
            Self::MissingId | Self::UnresolvedEntry => 422,

            // 404 Not Found
            Self::NotFound(_) | Self::UserNotFound(_) => 404,

            // 500 Internal Server Error
            Self::Store(_) => 500,
        }
    }
}

impl From<EntryError> for AppError {
    fn from(err: EntryError) -> Self {
        let message = err.to_string();
        match err {
            EntryError::Validation(_) => Self::Validation(message),
            EntryError::MissingId | EntryError::UnresolvedEntry => Self::BusinessRule(message),
            EntryError::NotFound(_) | EntryError::UserNotFound(_) => Self::NotFound(message),
            EntryError::Store(_) => Self::Database(message),
        }
    }
}
