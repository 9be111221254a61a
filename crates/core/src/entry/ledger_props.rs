//! Property-based tests for the entry ledger.
//!
//! - Balance equals settled income minus settled expense
//! - Status changes always land on the requested status

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::filter::EntryFilter;
use super::ledger::EntryLedger;
use super::memory::{MemoryStore, MemoryUsers};
use super::types::{EntryInput, EntryKind, EntryStatus};

/// Strategy to generate positive decimal amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![Just(EntryKind::Income), Just(EntryKind::Expense)]
}

fn status_strategy() -> impl Strategy<Value = EntryStatus> {
    prop_oneof![
        Just(EntryStatus::Pending),
        Just(EntryStatus::Settled),
        Just(EntryStatus::Cancelled),
    ]
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// The balance only ever reflects settled entries, signed by kind.
    #[test]
    fn prop_balance_is_settled_income_minus_settled_expense(
        entries in prop::collection::vec(
            (kind_strategy(), positive_amount(), status_strategy()),
            0..12,
        ),
    ) {
        let (balance, expected) = block_on(async {
            let users = Arc::new(MemoryUsers::default());
            let owner = users.add("Maria", "maria@example.com");
            let ledger = EntryLedger::new(Arc::new(MemoryStore::default()), users);

            let mut expected = Decimal::ZERO;
            for (kind, amount, status) in &entries {
                let created = ledger
                    .create(EntryInput {
                        description: Some("Generated".to_string()),
                        month: Some(6),
                        year: Some(2024),
                        amount: Some(*amount),
                        kind: Some(*kind),
                        owner: Some(owner),
                        ..EntryInput::default()
                    })
                    .await
                    .unwrap();
                ledger.set_status(created.into(), *status).await.unwrap();

                if status.counts_toward_balance() {
                    expected += kind.signed(*amount);
                }
            }

            (ledger.balance_for_user(owner).await.unwrap(), expected)
        });

        prop_assert_eq!(balance, expected);
    }

    /// A chain of status changes leaves the entry on the last status requested.
    #[test]
    fn prop_status_chain_ends_on_last_status(
        chain in prop::collection::vec(status_strategy(), 1..8),
    ) {
        let (stored, last) = block_on(async {
            let users = Arc::new(MemoryUsers::default());
            let owner = users.add("Maria", "maria@example.com");
            let store = Arc::new(MemoryStore::default());
            let ledger = EntryLedger::new(Arc::clone(&store), users);

            let mut current: EntryInput = ledger
                .create(EntryInput {
                    description: Some("Rent".to_string()),
                    month: Some(2),
                    year: Some(2024),
                    amount: Some(Decimal::new(40_000, 2)),
                    kind: Some(EntryKind::Expense),
                    owner: Some(owner),
                    ..EntryInput::default()
                })
                .await
                .unwrap()
                .into();
            for status in &chain {
                current = ledger.set_status(current, *status).await.unwrap().into();
            }

            let stored = ledger
                .search(&EntryFilter::new().owned_by(owner))
                .await
                .unwrap();
            (stored, chain[chain.len() - 1])
        });

        prop_assert_eq!(stored.len(), 1);
        prop_assert_eq!(stored[0].status, last);
    }
}
