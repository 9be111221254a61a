//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for entries and users
//! - Request extractors
//! - The JSON error envelope every failing route answers with

pub mod error;
pub mod extractors;
pub mod routes;

use axum::Router;
use myfinances_core::entry::EntryLedger;
use myfinances_core::user::UserService;
use myfinances_db::{EntryRepository, UserRepository};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Entry ledger backed by the `SeaORM` repositories.
pub type Ledger = EntryLedger<EntryRepository, UserRepository>;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Entry ledger.
    pub ledger: Arc<Ledger>,
    /// User registration and authentication.
    pub users: Arc<UserService<UserRepository>>,
}

impl AppState {
    /// Wires the repositories and services over one connection pool.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        let db = Arc::new(db);
        let entries = Arc::new(EntryRepository::new(Arc::clone(&db)));
        let users = Arc::new(UserRepository::new(Arc::clone(&db)));

        Self {
            db,
            ledger: Arc::new(EntryLedger::new(entries, Arc::clone(&users))),
            users: Arc::new(UserService::new(users)),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
