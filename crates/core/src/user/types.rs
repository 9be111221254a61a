//! User domain types.

use chrono::{DateTime, Utc};
use myfinances_shared::types::UserId;
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across users.
    pub email: String,
    /// Argon2id PHC string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

/// Registration request.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Input for inserting a user once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserInput {
    /// Pre-generated user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Normalized login email.
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}
