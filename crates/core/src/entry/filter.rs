//! Example-based entry filtering.

use myfinances_shared::types::UserId;
use serde::{Deserialize, Serialize};

use super::types::{Entry, EntryKind, EntryStatus};

/// Template for searching entries.
///
/// Every field left as `None` is a wildcard. The description matches as a
/// case-insensitive substring; all other fields must be equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Substring the description must contain, ignoring case.
    pub description: Option<String>,
    /// Exact month.
    pub month: Option<i32>,
    /// Exact year.
    pub year: Option<i32>,
    /// Exact owner.
    pub owner: Option<UserId>,
    /// Exact kind.
    pub kind: Option<EntryKind>,
    /// Exact status.
    pub status: Option<EntryStatus>,
}

impl EntryFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to one owner.
    #[must_use]
    pub const fn owned_by(mut self, owner: UserId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Requires the description to contain `text`, ignoring case.
    #[must_use]
    pub fn describing(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Restricts the filter to one month.
    #[must_use]
    pub const fn in_month(mut self, month: i32) -> Self {
        self.month = Some(month);
        self
    }

    /// Restricts the filter to one year.
    #[must_use]
    pub const fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Restricts the filter to one kind.
    #[must_use]
    pub const fn of_kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restricts the filter to one status.
    #[must_use]
    pub const fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.owner.is_none()
            && self.kind.is_none()
            && self.status.is_none()
    }

    /// Returns true if `entry` satisfies every field set on the filter.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.matches_description(&entry.description)
            && self.month.is_none_or(|m| m == entry.month)
            && self.year.is_none_or(|y| y == entry.year)
            && self.owner.is_none_or(|o| o == entry.owner)
            && self.kind.is_none_or(|k| k == entry.kind)
            && self.status.is_none_or(|s| s == entry.status)
    }

    /// Applies only the description rule.
    ///
    /// Stores that push the exact-match fields into their query use this
    /// for the remaining check.
    #[must_use]
    pub fn matches_description(&self, description: &str) -> bool {
        self.description
            .as_deref()
            .is_none_or(|needle| description.to_lowercase().contains(&needle.to_lowercase()))
    }
}
