// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingRecord {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub date: String, // YYYY-MM-DD
}

/// Field values for a new or replacement record.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingInput {
    pub amount: Decimal,
    pub category: String,
    pub date: String,
}

impl SpendingInput {
    pub fn new(amount: Decimal, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub label: String, // e.g. "December 2024"
    pub year: i32,
    pub month: u32,
    pub records: Vec<SpendingRecord>,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthGroupedView {
    /// Newest month first.
    pub groups: Vec<MonthGroup>,
    /// Matching records whose date could not be parsed.
    pub skipped: Vec<SpendingRecord>,
}

impl MonthGroupedView {
    pub fn group(&self, label: &str) -> Option<&MonthGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.groups.iter().map(|g| g.total).sum()
    }
}
