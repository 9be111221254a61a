//! User repository for database operations.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};
use tracing::error;

use crate::entities::users;
use myfinances_core::entry::{EntryError, UserDirectory};
use myfinances_core::user::{CreateUserInput, User, UserError, UserStore};
use myfinances_shared::types::UserId;

/// User repository for CRUD operations.
#[derive(Debug)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: UserId) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id.into_inner()).one(self.db.as_ref()).await
    }
}

impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(user_store_error)?;

        Ok(model.map(to_domain))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        let model = self.find_model(id).await.map_err(user_store_error)?;
        Ok(model.map(to_domain))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserError> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(self.db.as_ref())
            .await
            .map_err(user_store_error)?;

        Ok(count > 0)
    }

    async fn insert(&self, input: CreateUserInput) -> Result<User, UserError> {
        let user = users::ActiveModel {
            id: Set(input.id.into_inner()),
            name: Set(input.name),
            email: Set(input.email),
            password_hash: Set(input.password_hash),
            created_at: Set(Utc::now().into()),
        };

        match user.insert(self.db.as_ref()).await {
            Ok(model) => Ok(to_domain(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(UserError::EmailTaken)
            }
            Err(e) => Err(user_store_error(e)),
        }
    }
}

impl UserDirectory for UserRepository {
    async fn resolve_by_id(&self, id: UserId) -> Result<Option<User>, EntryError> {
        let model = self.find_model(id).await.map_err(|e| {
            error!(error = %e, "User lookup failed");
            EntryError::Store(e.to_string())
        })?;

        Ok(model.map(to_domain))
    }
}

fn user_store_error(e: DbErr) -> UserError {
    error!(error = %e, "User store query failed");
    UserError::Store(e.to_string())
}

/// Convert database model to domain model.
fn to_domain(model: users::Model) -> User {
    User {
        id: UserId::from_uuid(model.id),
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
