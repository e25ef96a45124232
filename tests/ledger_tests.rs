// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendbook::db::SqliteStore;
use spendbook::ledger::seed_records;
use spendbook::{Hydration, Ledger, LedgerError, MemoryStore, STORAGE_KEY, SlotStore, SpendingInput};
use std::collections::HashSet;
use tempfile::tempdir;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn sqlite_round_trip_restores_identical_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.sqlite");

    let saved = {
        let mut ledger = Ledger::open(SqliteStore::open(&path).unwrap());
        ledger
            .add(SpendingInput::new(dec("12.75"), "Taxi", "2025-02-14"))
            .unwrap();
        ledger
            .update(3, SpendingInput::new(dec("2600.5"), "Food", "2024-12-18"))
            .unwrap();
        ledger.remove(1).unwrap();
        ledger.records().to_vec()
    };

    let reopened = Ledger::open(SqliteStore::open(&path).unwrap());
    assert!(matches!(reopened.hydration(), Hydration::Restored));
    assert_eq!(reopened.records(), saved.as_slice());
}

#[test]
fn persisted_payload_is_plain_json_numbers() {
    let mut ledger = Ledger::open(MemoryStore::with_slot(STORAGE_KEY, "[]"));
    let rec = ledger
        .add(SpendingInput::new(dec("45.5"), "Groceries", "2025-03-01"))
        .unwrap();
    let raw = ledger.store().get(STORAGE_KEY).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            { "id": rec.id, "amount": 45.5, "category": "Groceries", "date": "2025-03-01" }
        ])
    );
}

#[test]
fn integer_amounts_from_older_payloads_load() {
    let raw = r#"[{"id":7,"amount":4550,"category":"Groceries","date":"2024-12-20"}]"#;
    let ledger = Ledger::open(MemoryStore::with_slot(STORAGE_KEY, raw));
    assert!(matches!(ledger.hydration(), Hydration::Restored));
    assert_eq!(ledger.get(7).unwrap().amount, Decimal::from(4550));
}

#[test]
fn ids_stay_unique_across_mixed_operations() {
    let mut ledger = Ledger::open(MemoryStore::new());
    for i in 0..25 {
        let rec = ledger
            .add(SpendingInput::new(Decimal::from(i), "Misc", "2025-05-01"))
            .unwrap();
        if i % 3 == 0 {
            ledger.remove(rec.id).unwrap();
        }
        if i % 4 == 0 {
            let _ = ledger.update(rec.id, SpendingInput::new(Decimal::ONE, "Edited", "2025-05-02"));
        }
    }
    let ids: HashSet<i64> = ledger.records().iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), ledger.len());
}

#[test]
fn clear_then_cold_start_reseeds_from_sqlite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.sqlite");
    {
        let mut ledger = Ledger::open(SqliteStore::open(&path).unwrap());
        ledger
            .add(SpendingInput::new(dec("1"), "Gum", "2025-01-01"))
            .unwrap();
        ledger.clear().unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.store().load(STORAGE_KEY).unwrap(), None);
    }
    let reopened = Ledger::open(SqliteStore::open(&path).unwrap());
    assert!(matches!(reopened.hydration(), Hydration::Seeded));
    assert_eq!(reopened.records(), seed_records().as_slice());
}

#[test]
fn failed_clear_is_reported() {
    let mut store = MemoryStore::new();
    store.set_fail_writes(true);
    let mut ledger = Ledger::open(store);
    assert!(matches!(ledger.clear(), Err(LedgerError::Persistence(_))));
    assert!(ledger.is_empty());
}

#[test]
fn query_totals_match_arithmetic_sum_per_month() {
    let mut ledger = Ledger::open(MemoryStore::with_slot(STORAGE_KEY, "[]"));
    let entries = [
        ("19.99", "Books", "2025-02-03"),
        ("0.01", "Books", "2025-02-28"),
        ("100", "Rent", "2025-03-01"),
        ("33.33", "Food", "2025-03-15"),
        ("33.34", "food court", "2025-03-16"),
    ];
    for (a, c, d) in entries {
        ledger.add(SpendingInput::new(dec(a), c, d)).unwrap();
    }

    let view = ledger.query("");
    let labels: Vec<_> = view.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, ["March 2025", "February 2025"]);
    assert_eq!(view.group("February 2025").unwrap().total, dec("20.00"));
    assert_eq!(view.group("March 2025").unwrap().total, dec("166.67"));

    let food = ledger.query("FOOD");
    assert_eq!(food.record_count(), 2);
    assert_eq!(food.groups[0].records[0].category, "food court");

    let by_month = ledger.query("2025-02");
    assert_eq!(by_month.groups.len(), 1);
    assert_eq!(by_month.groups[0].label, "February 2025");

    assert!(ledger.query("nothing like this").is_empty());
}
