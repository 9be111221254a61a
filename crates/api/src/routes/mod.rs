//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod entries;
pub mod health;
pub mod users;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(entries::routes())
        .merge(users::routes())
}
