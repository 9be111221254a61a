//! Collaborator traits the ledger persists and resolves through.
//!
//! These traits are implemented by the db crate to provide actual database
//! operations. Each write is expected to be atomic: a reader never observes a
//! partially applied save or delete.

use std::future::Future;

use myfinances_shared::types::{EntryId, UserId};
use rust_decimal::Decimal;

use super::error::EntryError;
use super::filter::EntryFilter;
use super::types::{Entry, EntryDraft, EntryKind, EntryStatus};
use crate::user::User;

/// Repository trait for entry persistence.
pub trait EntryStore: Send + Sync {
    /// Insert the draft when it has no id, otherwise overwrite the stored entry.
    ///
    /// Overwriting keeps the original `created_at`. Overwriting an unknown id
    /// fails with [`EntryError::NotFound`].
    fn save(&self, draft: EntryDraft) -> impl Future<Output = Result<Entry, EntryError>> + Send;

    /// Find an entry by ID.
    fn find_by_id(
        &self,
        id: EntryId,
    ) -> impl Future<Output = Result<Option<Entry>, EntryError>> + Send;

    /// Delete an entry by ID, failing with [`EntryError::NotFound`] if absent.
    fn delete(&self, id: EntryId) -> impl Future<Output = Result<(), EntryError>> + Send;

    /// List entries matching the filter, in insertion order.
    fn find_matching(
        &self,
        filter: &EntryFilter,
    ) -> impl Future<Output = Result<Vec<Entry>, EntryError>> + Send;

    /// Sum the amounts of one owner's entries with the given kind and status.
    ///
    /// Returns `None` when no entry matches.
    fn sum_amount(
        &self,
        owner: UserId,
        kind: EntryKind,
        status: EntryStatus,
    ) -> impl Future<Output = Result<Option<Decimal>, EntryError>> + Send;
}

/// Lookup of the users that own entries.
pub trait UserDirectory: Send + Sync {
    /// Resolve a user by ID.
    fn resolve_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, EntryError>> + Send;
}
