//! Financial entries.
//!
//! This module implements the entry lifecycle and balance engine:
//! - Domain types for entries, kinds and statuses
//! - Field validation with a fixed check order
//! - Example-based filtering
//! - The ledger service orchestrating persistence and balance queries
//! - Store traits implemented by the db crate

pub mod error;
pub mod filter;
pub mod ledger;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod ledger_props;
#[cfg(test)]
pub(crate) mod memory;
#[cfg(test)]
mod validation_props;

pub use error::{EntryError, ValidationError};
pub use filter::EntryFilter;
pub use ledger::EntryLedger;
pub use store::{EntryStore, UserDirectory};
pub use types::{Entry, EntryDraft, EntryInput, EntryKind, EntryStatus, ValidEntry};
pub use validation::validate;
