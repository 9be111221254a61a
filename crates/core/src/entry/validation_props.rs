//! Property-based tests for entry validation rules.
//!
//! Every property fixes the fields checked before the one under test, so a
//! failure pins down the check order as well as the rule itself.

use myfinances_shared::types::UserId;
use proptest::option;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::ValidationError;
use super::types::{EntryInput, EntryKind, EntryStatus};
use super::validation::validate;

/// Strategy to generate a valid positive amount (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a zero or negative amount.
fn non_positive_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

/// Strategy to generate an entry kind.
fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![Just(EntryKind::Income), Just(EntryKind::Expense)]
}

/// Strategy to generate an entry status.
fn status_strategy() -> impl Strategy<Value = EntryStatus> {
    prop_oneof![
        Just(EntryStatus::Pending),
        Just(EntryStatus::Settled),
        Just(EntryStatus::Cancelled),
    ]
}

/// Strategy to generate a description made only of whitespace.
fn blank_description() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,8}"
}

/// Strategy to generate a month outside 1..=12.
fn invalid_month() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..1, 13..i32::MAX]
}

/// Strategy to generate a year whose digit count is not four.
fn invalid_year() -> impl Strategy<Value = i32> {
    prop_oneof![i32::MIN..1000, 10_000..i32::MAX]
}

/// Strategy to generate an arbitrary, possibly invalid, candidate entry.
fn any_input() -> impl Strategy<Value = EntryInput> {
    (
        option::of(".{0,12}"),
        option::of(any::<i32>()),
        option::of(any::<i32>()),
        option::of((-1_000_000i64..1_000_000i64).prop_map(|c| Decimal::new(c, 2))),
        option::of(kind_strategy()),
        option::of(status_strategy()),
        any::<bool>(),
    )
        .prop_map(|(description, month, year, amount, kind, status, has_owner)| EntryInput {
            id: None,
            description,
            month,
            year,
            amount,
            kind,
            status,
            owner: has_owner.then(UserId::new),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A blank or missing description is reported whatever the other fields hold.
    #[test]
    fn prop_blank_description_rejected_first(
        description in option::of(blank_description()),
        input in any_input(),
    ) {
        let input = EntryInput { description, ..input };
        prop_assert_eq!(validate(&input), Err(ValidationError::InvalidDescription));
    }

    /// A bad month is reported before year, owner, amount or kind are looked at.
    #[test]
    fn prop_invalid_month_rejected_before_later_fields(
        month in option::of(invalid_month()),
        input in any_input(),
    ) {
        let input = EntryInput {
            description: Some("Groceries".to_string()),
            month,
            ..input
        };
        prop_assert_eq!(validate(&input), Err(ValidationError::InvalidMonth));
    }

    /// A year without exactly four digits is rejected.
    #[test]
    fn prop_invalid_year_rejected(
        month in 1i32..=12,
        year in option::of(invalid_year()),
        input in any_input(),
    ) {
        let input = EntryInput {
            description: Some("Groceries".to_string()),
            month: Some(month),
            year,
            ..input
        };
        prop_assert_eq!(validate(&input), Err(ValidationError::InvalidYear));
    }

    /// A zero, negative or missing amount is rejected once the earlier fields are valid.
    #[test]
    fn prop_non_positive_amount_rejected(
        month in 1i32..=12,
        year in 1000i32..=9999,
        amount in option::of(non_positive_amount()),
        kind in option::of(kind_strategy()),
    ) {
        let input = EntryInput {
            description: Some("Groceries".to_string()),
            month: Some(month),
            year: Some(year),
            owner: Some(UserId::new()),
            amount,
            kind,
            ..EntryInput::default()
        };
        prop_assert_eq!(validate(&input), Err(ValidationError::InvalidAmount));
    }

    /// Fully populated entries with in-range values are accepted unchanged.
    #[test]
    fn prop_valid_entry_accepted(
        description in "[A-Za-z][A-Za-z ]{0,20}",
        month in 1i32..=12,
        year in 1000i32..=9999,
        amount in positive_amount(),
        kind in kind_strategy(),
        status in option::of(status_strategy()),
    ) {
        let owner = UserId::new();
        let input = EntryInput {
            id: None,
            description: Some(description.clone()),
            month: Some(month),
            year: Some(year),
            amount: Some(amount),
            kind: Some(kind),
            status,
            owner: Some(owner),
        };

        let valid = validate(&input);
        prop_assert!(valid.is_ok(), "valid entry rejected: {:?}", valid);
        let valid = valid.unwrap();
        prop_assert_eq!(valid.description, description);
        prop_assert_eq!(valid.amount, amount);
        prop_assert_eq!(valid.owner, owner);
    }
}
