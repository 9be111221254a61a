//! User registration and authentication service.

use std::future::Future;
use std::sync::Arc;

use myfinances_shared::types::UserId;
use tracing::{info, warn};

use super::error::UserError;
use super::types::{CreateUserInput, NewUser, User};
use crate::auth::{hash_password, verify_password};

/// Repository trait for user persistence.
pub trait UserStore: Send + Sync {
    /// Find a user by normalized email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, UserError>> + Send;

    /// Find a user by ID.
    fn find_by_id(&self, id: UserId)
    -> impl Future<Output = Result<Option<User>, UserError>> + Send;

    /// Check whether an email is already registered.
    fn email_exists(&self, email: &str) -> impl Future<Output = Result<bool, UserError>> + Send;

    /// Insert a new user.
    ///
    /// Fails with [`UserError::EmailTaken`] if the email is taken by the time
    /// the insert runs.
    fn insert(&self, input: CreateUserInput)
    -> impl Future<Output = Result<User, UserError>> + Send;
}

/// Service for user operations.
pub struct UserService<R> {
    store: Arc<R>,
}

impl<R> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: UserStore> UserService<R> {
    /// Create a new user service.
    #[must_use]
    pub fn new(store: Arc<R>) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// The email is trimmed and lower-cased before it is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Name, email or password is blank
    /// - The email is already registered
    /// - Password hashing or the store fails
    pub async fn register(&self, new_user: NewUser) -> Result<User, UserError> {
        let name = new_user.name.trim();
        if name.is_empty() {
            return Err(UserError::MissingField("name"));
        }
        let email = normalize_email(&new_user.email);
        if email.is_empty() {
            return Err(UserError::MissingField("email"));
        }
        if new_user.password.is_empty() {
            return Err(UserError::MissingField("password"));
        }

        if self.store.email_exists(&email).await? {
            return Err(UserError::EmailTaken);
        }

        let password_hash = hash_password(&new_user.password)?;
        let user = self
            .store
            .insert(CreateUserInput {
                id: UserId::new(),
                name: name.to_string(),
                email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Authenticate a user by email and password.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::InvalidCredentials`] for an unknown email or a
    /// wrong password alike.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        let email = normalize_email(email);
        let Some(user) = self.store.find_by_email(&email).await? else {
            warn!("Authentication failed: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Authentication failed: wrong password");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::NotFound`] if no user has this id.
    pub async fn get_by_id(&self, id: UserId) -> Result<User, UserError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
