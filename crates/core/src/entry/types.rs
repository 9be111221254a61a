//! Entry domain types.
//!
//! An entry moves through three shapes:
//! - [`EntryInput`]: what a caller supplies, every field optional
//! - [`ValidEntry`] / [`EntryDraft`]: validated fields ready to be written
//! - [`Entry`]: a persisted entry carrying its store-assigned id

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use myfinances_shared::types::{EntryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Whether an entry brings money in or takes it out.
///
/// The kind fixes the sign of the entry's contribution to the balance;
/// the amount itself is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl EntryKind {
    /// Returns the wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    /// Applies the kind's sign to a positive amount.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            other => Err(ValidationError::InvalidKind(other.to_string())),
        }
    }
}

/// Lifecycle status of an entry.
///
/// Every status can move to every other status (including itself);
/// only [`EntryStatus::Settled`] entries count toward the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    /// Registered but not yet settled. Initial status of every entry.
    Pending,
    /// Money actually moved.
    Settled,
    /// Called off.
    Cancelled,
}

impl EntryStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Settled => "SETTLED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Returns true if entries with this status contribute to the balance.
    #[must_use]
    pub const fn counts_toward_balance(self) -> bool {
        matches!(self, Self::Settled)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "SETTLED" => Ok(Self::Settled),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(ValidationError::InvalidStatus(other.to_string())),
        }
    }
}

/// A persisted financial entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier.
    pub id: EntryId,
    /// Free-text description.
    pub description: String,
    /// Month of the entry (1-12).
    pub month: i32,
    /// Four-digit year of the entry.
    pub year: i32,
    /// Positive amount.
    pub amount: Decimal,
    /// Income or expense.
    pub kind: EntryKind,
    /// Lifecycle status.
    pub status: EntryStatus,
    /// The user owning the entry.
    pub owner: UserId,
    /// When the entry was first stored.
    pub created_at: DateTime<Utc>,
}

/// Candidate entry as supplied by a caller.
///
/// Used for creation, for updates (with `id` set) and as the payload of a
/// status change. Nothing here is trusted until [`super::validate`] accepts it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInput {
    /// Identifier of an already persisted entry.
    #[serde(default)]
    pub id: Option<EntryId>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Month.
    #[serde(default)]
    pub month: Option<i32>,
    /// Year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Kind.
    #[serde(default)]
    pub kind: Option<EntryKind>,
    /// Status. Ignored on creation.
    #[serde(default)]
    pub status: Option<EntryStatus>,
    /// Owner.
    #[serde(default)]
    pub owner: Option<UserId>,
}

impl From<Entry> for EntryInput {
    fn from(entry: Entry) -> Self {
        Self {
            id: Some(entry.id),
            description: Some(entry.description),
            month: Some(entry.month),
            year: Some(entry.year),
            amount: Some(entry.amount),
            kind: Some(entry.kind),
            status: Some(entry.status),
            owner: Some(entry.owner),
        }
    }
}

/// Entry fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    /// Non-blank description.
    pub description: String,
    /// Month in 1..=12.
    pub month: i32,
    /// Year in 1000..=9999.
    pub year: i32,
    /// Amount greater than zero.
    pub amount: Decimal,
    /// Kind.
    pub kind: EntryKind,
    /// Owner reference.
    pub owner: UserId,
}

impl ValidEntry {
    /// Attaches the identity and status the ledger decided on.
    #[must_use]
    pub fn into_draft(self, id: Option<EntryId>, status: EntryStatus) -> EntryDraft {
        EntryDraft {
            id,
            description: self.description,
            month: self.month,
            year: self.year,
            amount: self.amount,
            kind: self.kind,
            status,
            owner: self.owner,
        }
    }
}

/// A validated entry handed to an [`super::EntryStore`] for writing.
///
/// `id == None` means insert; `Some(id)` means overwrite that entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    /// Target entry, if it already exists.
    pub id: Option<EntryId>,
    /// Description.
    pub description: String,
    /// Month.
    pub month: i32,
    /// Year.
    pub year: i32,
    /// Amount.
    pub amount: Decimal,
    /// Kind.
    pub kind: EntryKind,
    /// Status to store.
    pub status: EntryStatus,
    /// Owner.
    pub owner: UserId,
}

impl EntryDraft {
    /// Turns the draft into a persisted entry once the store has fixed its
    /// identity and registration time.
    #[must_use]
    pub fn into_entry(self, id: EntryId, created_at: DateTime<Utc>) -> Entry {
        Entry {
            id,
            description: self.description,
            month: self.month,
            year: self.year,
            amount: self.amount,
            kind: self.kind,
            status: self.status,
            owner: self.owner,
            created_at,
        }
    }
}
