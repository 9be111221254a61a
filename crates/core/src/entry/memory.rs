//! In-memory collaborators for ledger tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use myfinances_shared::types::{EntryId, UserId};
use rust_decimal::Decimal;

use super::error::EntryError;
use super::filter::EntryFilter;
use super::store::{EntryStore, UserDirectory};
use super::types::{Entry, EntryDraft, EntryKind, EntryStatus};
use crate::user::User;

/// Entry store keeping entries in insertion order and counting saves.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<Entry>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Number of `save` calls so far, successful or not.
    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Stores an entry directly, bypassing the ledger.
    pub fn insert_raw(&self, owner: UserId, amount: Decimal, kind: EntryKind, status: EntryStatus) {
        self.entries.lock().unwrap().push(Entry {
            id: EntryId::new(),
            description: "Imported".to_string(),
            month: 1,
            year: 2024,
            amount,
            kind,
            status,
            owner,
            created_at: Utc::now(),
        });
    }
}

impl EntryStore for MemoryStore {
    async fn save(&self, draft: EntryDraft) -> Result<Entry, EntryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();

        match draft.id {
            None => {
                let entry = draft.into_entry(EntryId::new(), Utc::now());
                entries.push(entry.clone());
                Ok(entry)
            }
            Some(id) => {
                let slot = entries
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or(EntryError::NotFound(id))?;
                *slot = draft.into_entry(id, slot.created_at);
                Ok(slot.clone())
            }
        }
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<Entry>, EntryError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn delete(&self, id: EntryId) -> Result<(), EntryError> {
        let mut entries = self.entries.lock().unwrap();
        let position = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(EntryError::NotFound(id))?;
        entries.remove(position);
        Ok(())
    }

    async fn find_matching(&self, filter: &EntryFilter) -> Result<Vec<Entry>, EntryError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }

    async fn sum_amount(
        &self,
        owner: UserId,
        kind: EntryKind,
        status: EntryStatus,
    ) -> Result<Option<Decimal>, EntryError> {
        let filter = EntryFilter::new()
            .owned_by(owner)
            .of_kind(kind)
            .with_status(status);
        let entries = self.entries.lock().unwrap();
        let mut matching = entries.iter().filter(|e| filter.matches(e)).peekable();
        if matching.peek().is_none() {
            return Ok(None);
        }
        Ok(Some(matching.map(|e| e.amount).sum()))
    }
}

/// User directory backed by a map.
#[derive(Default)]
pub struct MemoryUsers {
    users: Mutex<HashMap<UserId, User>>,
}

impl MemoryUsers {
    /// Registers a user and returns its id.
    pub fn add(&self, name: &str, email: &str) -> UserId {
        let user = User {
            id: UserId::new(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
        };
        let id = user.id;
        self.users.lock().unwrap().insert(id, user);
        id
    }
}

impl UserDirectory for MemoryUsers {
    async fn resolve_by_id(&self, id: UserId) -> Result<Option<User>, EntryError> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}
