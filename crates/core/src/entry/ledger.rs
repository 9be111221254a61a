//! Entry ledger service.
//!
//! Orchestrates validation, persistence, status changes, search and balance
//! computation for entries. The store and user directory are handed in
//! explicitly; the ledger itself holds no mutable state.

use std::sync::Arc;

use myfinances_shared::types::{EntryId, UserId};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::EntryError;
use super::filter::EntryFilter;
use super::store::{EntryStore, UserDirectory};
use super::types::{Entry, EntryInput, EntryKind, EntryStatus};
use super::validation::validate;

/// Ledger service for financial entries.
pub struct EntryLedger<S, U> {
    store: Arc<S>,
    users: Arc<U>,
}

impl<S, U> Clone for EntryLedger<S, U> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            users: Arc::clone(&self.users),
        }
    }
}

impl<S: EntryStore, U: UserDirectory> EntryLedger<S, U> {
    /// Create a new ledger over the given store and user directory.
    #[must_use]
    pub fn new(store: Arc<S>, users: Arc<U>) -> Self {
        Self { store, users }
    }

    /// Validate and persist a new entry.
    ///
    /// The stored entry always starts as [`EntryStatus::Pending`], whatever
    /// status or id the input carried.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A field fails validation (nothing is persisted)
    /// - The owner does not exist
    /// - The store fails
    pub async fn create(&self, input: EntryInput) -> Result<Entry, EntryError> {
        let valid = validate(&input)?;
        self.ensure_owner_exists(valid.owner).await?;

        let entry = self
            .store
            .save(valid.into_draft(None, EntryStatus::Pending))
            .await?;

        info!(entry_id = %entry.id, owner = %entry.owner, kind = %entry.kind, "Entry created");
        Ok(entry)
    }

    /// Re-validate and overwrite an existing entry.
    ///
    /// The status is taken from the input; when the input has none, the
    /// stored status is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input has no id ([`EntryError::MissingId`], the store is not touched)
    /// - A field fails validation
    /// - The owner or the entry does not exist
    /// - The store fails
    pub async fn update(&self, input: EntryInput) -> Result<Entry, EntryError> {
        let id = input.id.ok_or(EntryError::MissingId)?;
        let valid = validate(&input)?;
        self.ensure_owner_exists(valid.owner).await?;

        let status = match input.status {
            Some(status) => status,
            None => self.get_by_id(id).await?.status,
        };

        let entry = self.store.save(valid.into_draft(Some(id), status)).await?;

        info!(entry_id = %entry.id, status = %entry.status, "Entry updated");
        Ok(entry)
    }

    /// Remove a persisted entry.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::MissingId`] if the input has no id, or
    /// [`EntryError::NotFound`] if the store does not hold it.
    pub async fn delete(&self, input: &EntryInput) -> Result<(), EntryError> {
        let id = input.id.ok_or(EntryError::MissingId)?;
        self.store.delete(id).await?;

        info!(entry_id = %id, "Entry deleted");
        Ok(())
    }

    /// Fetch an entry by id.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::NotFound`] if no entry has this id.
    pub async fn get_by_id(&self, id: EntryId) -> Result<Entry, EntryError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(EntryError::NotFound(id))
    }

    /// List every entry matching the template, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn search(&self, filter: &EntryFilter) -> Result<Vec<Entry>, EntryError> {
        let entries = self.store.find_matching(filter).await?;
        debug!(
            count = entries.len(),
            unfiltered = filter.is_empty(),
            "Entry search completed"
        );
        Ok(entries)
    }

    /// Move an entry to `status` and save it through [`Self::update`].
    ///
    /// Any status may follow any other, including itself.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::UnresolvedEntry`] if the entry has no id, and
    /// any error [`Self::update`] returns.
    pub async fn set_status(
        &self,
        mut entry: EntryInput,
        status: EntryStatus,
    ) -> Result<Entry, EntryError> {
        if entry.id.is_none() {
            return Err(EntryError::UnresolvedEntry);
        }

        let previous = entry.status;
        entry.status = Some(status);
        let entry = self.update(entry).await?;

        info!(
            entry_id = %entry.id,
            ?previous,
            status = %status,
            counted = status.counts_toward_balance(),
            "Entry status changed"
        );
        Ok(entry)
    }

    /// Settled income minus settled expense for one user.
    ///
    /// Pending and cancelled entries never contribute. A user without
    /// settled entries has a balance of zero.
    ///
    /// The two sums are read independently, so a concurrent status change
    /// may be reflected in one and not the other.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn balance_for_user(&self, owner: UserId) -> Result<Decimal, EntryError> {
        let mut balance = Decimal::ZERO;
        for kind in [EntryKind::Income, EntryKind::Expense] {
            let total = self
                .store
                .sum_amount(owner, kind, EntryStatus::Settled)
                .await?
                .unwrap_or(Decimal::ZERO);
            balance += kind.signed(total);
        }

        Ok(balance)
    }

    async fn ensure_owner_exists(&self, owner: UserId) -> Result<(), EntryError> {
        match self.users.resolve_by_id(owner).await? {
            Some(_) => Ok(()),
            None => Err(EntryError::UserNotFound(owner)),
        }
    }
}
