//! Entry routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extractors::{AppJson, AppPath, AppQuery},
};
use myfinances_core::entry::{EntryFilter, EntryInput, EntryStatus, ValidationError};
use myfinances_shared::types::{EntryId, UserId};

/// Creates the entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries", get(search_entries).post(create_entry))
        .route(
            "/entries/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route("/entries/{id}/status", put(change_status))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for creating or replacing an entry.
///
/// Kind and status arrive as raw wire names so an unknown value is reported
/// as `INVALID_KIND` / `INVALID_STATUS` rather than a body rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EntryRequest {
    /// Description.
    pub description: Option<String>,
    /// Month (1-12).
    pub month: Option<i32>,
    /// Four-digit year.
    pub year: Option<i32>,
    /// Positive amount.
    pub amount: Option<Decimal>,
    /// `INCOME` or `EXPENSE`.
    pub kind: Option<String>,
    /// `PENDING`, `SETTLED` or `CANCELLED`. Ignored on creation.
    pub status: Option<String>,
    /// Owner.
    pub owner: Option<UserId>,
}

impl EntryRequest {
    fn into_input(self, id: Option<EntryId>) -> Result<EntryInput, ValidationError> {
        Ok(EntryInput {
            id,
            description: self.description,
            month: self.month,
            year: self.year,
            amount: self.amount,
            kind: parse_wire_name(self.kind.as_deref())?,
            status: parse_wire_name(self.status.as_deref())?,
            owner: self.owner,
        })
    }
}

/// Query parameters for searching entries.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Owner of the entries. Required.
    pub user: Option<UserId>,
    /// Case-insensitive description fragment.
    pub description: Option<String>,
    /// Exact month.
    pub month: Option<i32>,
    /// Exact year.
    pub year: Option<i32>,
    /// `INCOME` or `EXPENSE`.
    pub kind: Option<String>,
    /// `PENDING`, `SETTLED` or `CANCELLED`.
    pub status: Option<String>,
}

impl SearchParams {
    fn into_filter(self) -> Result<EntryFilter, ValidationError> {
        let owner = self.user.ok_or(ValidationError::MissingUser)?;
        let mut filter = EntryFilter::new().owned_by(owner);

        if let Some(description) = self.description {
            filter = filter.describing(description);
        }
        if let Some(month) = self.month {
            filter = filter.in_month(month);
        }
        if let Some(year) = self.year {
            filter = filter.in_year(year);
        }
        if let Some(kind) = parse_wire_name(self.kind.as_deref())? {
            filter = filter.of_kind(kind);
        }
        if let Some(status) = parse_wire_name(self.status.as_deref())? {
            filter = filter.with_status(status);
        }

        Ok(filter)
    }
}

/// Request body for changing an entry's status.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    /// Target status wire name.
    pub status: String,
}

fn parse_wire_name<T>(raw: Option<&str>) -> Result<Option<T>, ValidationError>
where
    T: FromStr<Err = ValidationError>,
{
    raw.map(str::parse).transpose()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/entries`
async fn create_entry(
    State(state): State<AppState>,
    AppJson(request): AppJson<EntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state.ledger.create(request.into_input(None)?).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET `/entries`
async fn search_entries(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = params.into_filter()?;
    let entries = state.ledger.search(&filter).await?;
    Ok(Json(entries))
}

/// GET `/entries/{id}`
async fn get_entry(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntryId>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state.ledger.get_by_id(id).await?;
    Ok(Json(entry))
}

/// PUT `/entries/{id}`
async fn update_entry(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntryId>,
    AppJson(request): AppJson<EntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let input = request.into_input(Some(id))?;
    state.ledger.get_by_id(id).await?;

    let entry = state.ledger.update(input).await?;
    Ok(Json(entry))
}

/// PUT `/entries/{id}/status`
///
/// Answers with the entry as read back after the change.
async fn change_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntryId>,
    AppJson(request): AppJson<StatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let status: EntryStatus = request.status.parse()?;
    let entry = state.ledger.get_by_id(id).await?;

    state.ledger.set_status(entry.into(), status).await?;
    let entry = state.ledger.get_by_id(id).await?;
    Ok(Json(entry))
}

/// DELETE `/entries/{id}`
async fn delete_entry(
    State(state): State<AppState>,
    AppPath(id): AppPath<EntryId>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state.ledger.get_by_id(id).await?;
    state.ledger.delete(&entry.into()).await?;

    info!(entry_id = %id, "Entry removed via API");
    Ok(StatusCode::NO_CONTENT)
}
