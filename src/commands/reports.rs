// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ledger::Ledger;
use crate::models::MonthGroupedView;
use crate::storage::SlotStore;
use crate::utils::{fmt_rupees, maybe_print_json, pretty_table};
use anyhow::Result;
use tracing::warn;

pub const EMPTY_STATE: &str = "No spendings recorded yet. Start by adding your first spending!";

pub fn query_view<S: SlotStore>(ledger: &Ledger<S>, sub: &clap::ArgMatches) -> MonthGroupedView {
    let search = sub
        .get_one::<String>("search")
        .map(String::as_str)
        .unwrap_or("");
    ledger.query(search)
}

pub fn list<S: SlotStore>(ledger: &Ledger<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let view = query_view(ledger, sub);
    if !view.skipped.is_empty() {
        warn!(count = view.skipped.len(), "spendings with unreadable dates not shown");
    }
    if maybe_print_json(json_flag, jsonl_flag, &view.groups)? {
        return Ok(());
    }
    if view.is_empty() {
        println!("{}", EMPTY_STATE);
        return Ok(());
    }
    for group in &view.groups {
        println!("{}  Total: {}", group.label, fmt_rupees(&group.total));
        let rows: Vec<Vec<String>> = group
            .records
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    fmt_rupees(&r.amount),
                    r.category.clone(),
                    r.date.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Amount", "Category", "Date"], rows)
        );
    }
    Ok(())
}
