//! User routes: registration, authentication and balance.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    error::ApiError,
    extractors::{AppJson, AppPath},
};
use myfinances_core::user::NewUser;
use myfinances_shared::types::UserId;

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/authenticate", post(authenticate))
        .route("/users/{id}/balance", get(balance))
}

/// Request body for authentication.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Balance of one user.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// The user the balance belongs to.
    pub user_id: UserId,
    /// Settled income minus settled expense.
    pub balance: Decimal,
}

/// POST `/users`
async fn register(
    State(state): State<AppState>,
    AppJson(new_user): AppJson<NewUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.register(new_user).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST `/users/authenticate`
async fn authenticate(
    State(state): State<AppState>,
    AppJson(credentials): AppJson<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .authenticate(&credentials.email, &credentials.password)
        .await?;
    Ok(Json(user))
}

/// GET `/users/{id}/balance`
async fn balance(
    State(state): State<AppState>,
    AppPath(id): AppPath<UserId>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.users.get_by_id(id).await?;
    let balance = state.ledger.balance_for_user(user.id).await?;

    Ok(Json(BalanceResponse {
        user_id: user.id,
        balance,
    }))
}
