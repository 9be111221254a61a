//! Entry repository for database operations.
//!
//! Implements [`EntryStore`] on top of the `entries` table. Exact-match
//! filter fields are pushed into SQL; the description rule is applied to the
//! returned rows so it folds case the same way as the in-memory filter.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, Unchanged,
};
use tracing::error;

use crate::entities::{
    entries,
    sea_orm_active_enums::{EntryKind as DbEntryKind, EntryStatus as DbEntryStatus},
};
use myfinances_core::entry::{
    Entry, EntryDraft, EntryError, EntryFilter, EntryKind, EntryStatus, EntryStore,
};
use myfinances_shared::types::{EntryId, UserId};

/// Entry repository implementation.
#[derive(Debug)]
pub struct EntryRepository {
    db: Arc<DatabaseConnection>,
}

impl EntryRepository {
    /// Create a new entry repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn insert(&self, draft: EntryDraft) -> Result<Entry, EntryError> {
        let active_model = entries::ActiveModel {
            id: Set(EntryId::new().into_inner()),
            description: Set(draft.description),
            month: Set(draft.month),
            year: Set(draft.year),
            amount: Set(draft.amount),
            kind: Set(to_db_kind(draft.kind)),
            status: Set(to_db_status(draft.status)),
            user_id: Set(draft.owner.into_inner()),
            created_at: Set(Utc::now().into()),
        };

        let model = active_model
            .insert(self.db.as_ref())
            .await
            .map_err(store_error)?;
        Ok(to_domain(model))
    }

    async fn overwrite(&self, id: EntryId, draft: EntryDraft) -> Result<Entry, EntryError> {
        let active_model = entries::ActiveModel {
            id: Unchanged(id.into_inner()),
            description: Set(draft.description),
            month: Set(draft.month),
            year: Set(draft.year),
            amount: Set(draft.amount),
            kind: Set(to_db_kind(draft.kind)),
            status: Set(to_db_status(draft.status)),
            user_id: Set(draft.owner.into_inner()),
            created_at: NotSet,
        };

        match active_model.update(self.db.as_ref()).await {
            Ok(model) => Ok(to_domain(model)),
            Err(DbErr::RecordNotUpdated) => Err(EntryError::NotFound(id)),
            Err(e) => Err(store_error(e)),
        }
    }
}

impl EntryStore for EntryRepository {
    async fn save(&self, draft: EntryDraft) -> Result<Entry, EntryError> {
        match draft.id {
            None => self.insert(draft).await,
            Some(id) => self.overwrite(id, draft).await,
        }
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<Entry>, EntryError> {
        let model = entries::Entity::find_by_id(id.into_inner())
            .one(self.db.as_ref())
            .await
            .map_err(store_error)?;

        Ok(model.map(to_domain))
    }

    async fn delete(&self, id: EntryId) -> Result<(), EntryError> {
        let result = entries::Entity::delete_by_id(id.into_inner())
            .exec(self.db.as_ref())
            .await
            .map_err(store_error)?;

        if result.rows_affected == 0 {
            return Err(EntryError::NotFound(id));
        }
        Ok(())
    }

    async fn find_matching(&self, filter: &EntryFilter) -> Result<Vec<Entry>, EntryError> {
        let models = apply_exact_fields(entries::Entity::find(), filter)
            .order_by_asc(entries::Column::CreatedAt)
            .order_by_asc(entries::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(store_error)?;

        Ok(models
            .into_iter()
            .filter(|m| filter.matches_description(&m.description))
            .map(to_domain)
            .collect())
    }

    async fn sum_amount(
        &self,
        owner: UserId,
        kind: EntryKind,
        status: EntryStatus,
    ) -> Result<Option<Decimal>, EntryError> {
        let total: Option<Option<Decimal>> = entries::Entity::find()
            .select_only()
            .column_as(entries::Column::Amount.sum(), "total")
            .filter(entries::Column::UserId.eq(owner.into_inner()))
            .filter(entries::Column::Kind.eq(to_db_kind(kind)))
            .filter(entries::Column::Status.eq(to_db_status(status)))
            .into_tuple()
            .one(self.db.as_ref())
            .await
            .map_err(store_error)?;

        Ok(total.flatten())
    }
}

/// Narrow a query by every exact-match field set on the filter.
fn apply_exact_fields(
    mut query: Select<entries::Entity>,
    filter: &EntryFilter,
) -> Select<entries::Entity> {
    if let Some(owner) = filter.owner {
        query = query.filter(entries::Column::UserId.eq(owner.into_inner()));
    }
    if let Some(month) = filter.month {
        query = query.filter(entries::Column::Month.eq(month));
    }
    if let Some(year) = filter.year {
        query = query.filter(entries::Column::Year.eq(year));
    }
    if let Some(kind) = filter.kind {
        query = query.filter(entries::Column::Kind.eq(to_db_kind(kind)));
    }
    if let Some(status) = filter.status {
        query = query.filter(entries::Column::Status.eq(to_db_status(status)));
    }
    query
}

fn store_error(e: DbErr) -> EntryError {
    error!(error = %e, "Entry store query failed");
    EntryError::Store(e.to_string())
}

/// Convert domain entry kind to database enum.
const fn to_db_kind(kind: EntryKind) -> DbEntryKind {
    match kind {
        EntryKind::Income => DbEntryKind::Income,
        EntryKind::Expense => DbEntryKind::Expense,
    }
}

/// Convert database entry kind to domain enum.
const fn from_db_kind(kind: DbEntryKind) -> EntryKind {
    match kind {
        DbEntryKind::Income => EntryKind::Income,
        DbEntryKind::Expense => EntryKind::Expense,
    }
}

/// Convert domain entry status to database enum.
const fn to_db_status(status: EntryStatus) -> DbEntryStatus {
    match status {
        EntryStatus::Pending => DbEntryStatus::Pending,
        EntryStatus::Settled => DbEntryStatus::Settled,
        EntryStatus::Cancelled => DbEntryStatus::Cancelled,
    }
}

/// Convert database entry status to domain enum.
const fn from_db_status(status: DbEntryStatus) -> EntryStatus {
    match status {
        DbEntryStatus::Pending => EntryStatus::Pending,
        DbEntryStatus::Settled => EntryStatus::Settled,
        DbEntryStatus::Cancelled => EntryStatus::Cancelled,
    }
}

/// Convert database model to domain model.
fn to_domain(model: entries::Model) -> Entry {
    Entry {
        id: EntryId::from_uuid(model.id),
        description: model.description,
        month: model.month,
        year: model.year,
        amount: model.amount,
        kind: from_db_kind(model.kind),
        status: from_db_status(model.status),
        owner: UserId::from_uuid(model.user_id),
        created_at: model.created_at.with_timezone(&Utc),
    }
}
