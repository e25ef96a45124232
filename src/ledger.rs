// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The spending ledger: owns every record, mirrors them into a single
//! persisted slot after each mutation, and derives the month-grouped view.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{MonthGroup, MonthGroupedView, SpendingInput, SpendingRecord};
use crate::storage::SlotStore;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Slot holding the JSON-encoded record list.
pub const STORAGE_KEY: &str = "spendings";

pub fn seed_records() -> Vec<SpendingRecord> {
    vec![
        SpendingRecord {
            id: 1,
            amount: Decimal::from(4550),
            category: "Groceries".into(),
            date: "2024-12-20".into(),
        },
        SpendingRecord {
            id: 2,
            amount: Decimal::from(8999),
            category: "Shopping".into(),
            date: "2024-12-19".into(),
        },
        SpendingRecord {
            id: 3,
            amount: Decimal::from(2500),
            category: "Food".into(),
            date: "2024-12-18".into(),
        },
    ]
}

/// How the ledger obtained its initial records.
#[derive(Debug)]
pub enum Hydration {
    Restored,
    Seeded,
    /// The slot was unreadable; the seed was installed instead.
    Recovered(LedgerError),
}

pub struct Ledger<S: SlotStore> {
    store: S,
    records: Vec<SpendingRecord>,
    hydration: Hydration,
}

impl<S: SlotStore> Ledger<S> {
    /// Hydrates from the persisted slot. Never fails: a missing slot installs
    /// the seed, a broken one installs the seed and records the error.
    pub fn open(store: S) -> Self {
        let (records, hydration) = match read_slot(&store) {
            Ok(Some(records)) => {
                debug!(count = records.len(), "restored spendings");
                (records, Hydration::Restored)
            }
            Ok(None) => {
                debug!("no persisted spendings, installing seed");
                (seed_records(), Hydration::Seeded)
            }
            Err(e) => {
                warn!(error = %e, "persisted spendings unreadable, installing seed");
                (seed_records(), Hydration::Recovered(e))
            }
        };
        Self {
            store,
            records,
            hydration,
        }
    }

    pub fn hydration(&self) -> &Hydration {
        &self.hydration
    }

    pub fn records(&self) -> &[SpendingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&SpendingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a record under a fresh id. On a persistence error the record
    /// stays in memory and the error is returned.
    pub fn add(&mut self, input: SpendingInput) -> LedgerResult<SpendingRecord> {
        check_presence(&input)?;
        let record = SpendingRecord {
            id: self.next_id(chrono::Utc::now().timestamp_millis())?,
            amount: input.amount,
            category: input.category,
            date: input.date,
        };
        self.records.push(record.clone());
        info!(id = record.id, "added spending");
        self.persist()?;
        Ok(record)
    }

    pub fn update(&mut self, id: i64, input: SpendingInput) -> LedgerResult<SpendingRecord> {
        check_presence(&input)?;
        let slot = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        *slot = SpendingRecord {
            id,
            amount: input.amount,
            category: input.category,
            date: input.date,
        };
        let updated = slot.clone();
        info!(id, "updated spending");
        self.persist()?;
        Ok(updated)
    }

    pub fn remove(&mut self, id: i64) -> LedgerResult<()> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        self.records.remove(pos);
        info!(id, "removed spending");
        self.persist()
    }

    /// Empties the ledger and deletes the slot, so the next cold start
    /// installs the seed again.
    pub fn clear(&mut self) -> LedgerResult<()> {
        self.records.clear();
        info!("cleared all spendings");
        self.store.delete(STORAGE_KEY)
    }

    /// Filters by `search`, groups by calendar month (newest first) and
    /// totals each group. Recomputed on every call.
    pub fn query(&self, search: &str) -> MonthGroupedView {
        let needle_lower = search.to_lowercase();

        let mut buckets: BTreeMap<(i32, u32), Vec<(NaiveDate, SpendingRecord)>> =
            BTreeMap::new();
        let mut skipped = Vec::new();
        for r in self
            .records
            .iter()
            .filter(|r| matches_search(r, search, &needle_lower))
        {
            match NaiveDate::parse_from_str(&r.date, "%Y-%m-%d") {
                Ok(d) => buckets
                    .entry((d.year(), d.month()))
                    .or_default()
                    .push((d, r.clone())),
                Err(_) => {
                    debug!(id = r.id, date = %r.date, "unparseable date left out of groups");
                    skipped.push(r.clone());
                }
            }
        }

        let groups = buckets
            .into_iter()
            .rev()
            .filter_map(|((year, month), mut dated)| {
                // compare parsed dates: "2025-1-5" is older than "2025-01-10"
                dated.sort_by(|(da, a), (db, b)| db.cmp(da).then(b.id.cmp(&a.id)));
                let records: Vec<SpendingRecord> = dated.into_iter().map(|(_, r)| r).collect();
                let total: Decimal = records.iter().map(|r| r.amount).sum();
                let label = NaiveDate::from_ymd_opt(year, month, 1)?
                    .format("%B %Y")
                    .to_string();
                Some(MonthGroup {
                    label,
                    year,
                    month,
                    records,
                    total,
                })
            })
            .collect();

        MonthGroupedView { groups, skipped }
    }

    pub fn grand_total(&self, search: &str) -> Decimal {
        self.query(search).total()
    }

    // Timestamp-derived, bumped past the largest existing id when the clock
    // would collide.
    fn next_id(&self, now_millis: i64) -> LedgerResult<i64> {
        let max = self.records.iter().map(|r| r.id).max().unwrap_or(0);
        if now_millis > max {
            return Ok(now_millis);
        }
        max.checked_add(1).ok_or(LedgerError::IdSpaceExhausted)
    }

    fn persist(&mut self) -> LedgerResult<()> {
        let payload = serde_json::to_string(&self.records)?;
        self.store.save(STORAGE_KEY, &payload).inspect_err(|e| {
            warn!(error = %e, "failed to persist spendings; keeping in-memory state");
        })
    }
}

fn read_slot<S: SlotStore>(store: &S) -> LedgerResult<Option<Vec<SpendingRecord>>> {
    match store.load(STORAGE_KEY)? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

fn check_presence(input: &SpendingInput) -> LedgerResult<()> {
    if input.category.trim().is_empty() {
        return Err(LedgerError::Validation("category".into()));
    }
    if input.date.trim().is_empty() {
        return Err(LedgerError::Validation("date".into()));
    }
    Ok(())
}

fn matches_search(r: &SpendingRecord, needle: &str, needle_lower: &str) -> bool {
    // plain substring: whitespace in the search is significant
    needle.is_empty()
        || r.category.to_lowercase().contains(needle_lower)
        || r.date.contains(needle)
}
