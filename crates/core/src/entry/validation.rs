//! Business rule validation for entries.

use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::{EntryInput, ValidEntry};

/// Years must have exactly four decimal digits.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Longest description the `entries` table stores, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 255;

/// Most fractional digits an amount may carry once trailing zeros are dropped.
pub const MAX_AMOUNT_SCALE: u32 = 4;

/// Amounts must stay below this bound (15 integer digits).
const AMOUNT_LIMIT: i64 = 1_000_000_000_000_000;

/// Validates a candidate entry.
///
/// Checks run in a fixed order and stop at the first failure, so the
/// reported reason is deterministic:
/// 1. description present, not blank and at most [`MAX_DESCRIPTION_CHARS`]
/// 2. month present and in 1..=12
/// 3. year present and four digits
/// 4. owner present
/// 5. amount present, greater than zero, below 10^15 and with at most
///    [`MAX_AMOUNT_SCALE`] fractional digits
/// 6. kind present
///
/// `id` and `status` are not looked at.
///
/// # Errors
///
/// Returns the [`ValidationError`] of the first failing check.
pub fn validate(input: &EntryInput) -> Result<ValidEntry, ValidationError> {
    let description = match &input.description {
        Some(d) if !d.trim().is_empty() && d.chars().count() <= MAX_DESCRIPTION_CHARS => {
            d.clone()
        }
        _ => return Err(ValidationError::InvalidDescription),
    };

    let month = input
        .month
        .filter(|m| (1..=12).contains(m))
        .ok_or(ValidationError::InvalidMonth)?;

    let year = input
        .year
        .filter(|y| YEAR_RANGE.contains(y))
        .ok_or(ValidationError::InvalidYear)?;

    let owner = input.owner.ok_or(ValidationError::MissingUser)?;

    let amount = input
        .amount
        .filter(|a| *a > Decimal::ZERO && *a < Decimal::from(AMOUNT_LIMIT))
        .filter(|a| a.normalize().scale() <= MAX_AMOUNT_SCALE)
        .ok_or(ValidationError::InvalidAmount)?;

    let kind = input.kind.ok_or(ValidationError::MissingKind)?;

    Ok(ValidEntry {
        description,
        month,
        year,
        amount,
        kind,
        owner,
    })
}
