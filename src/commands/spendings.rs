// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::models::SpendingInput;
use crate::notify::Notifier;
use crate::storage::SlotStore;
use crate::utils::{fmt_rupees, parse_date, parse_decimal, today};
use anyhow::Result;

pub const MISSING_FIELDS: &str = "Please fill all fields";

fn field<'a>(sub: &'a clap::ArgMatches, name: &str) -> Option<&'a str> {
    sub.get_one::<String>(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

pub fn add<S: SlotStore>(
    ledger: &mut Ledger<S>,
    notifier: &mut Notifier,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let date = field(sub, "date").map(str::to_string).unwrap_or_else(today);
    let (Some(amount), Some(category)) = (field(sub, "amount"), field(sub, "category")) else {
        notifier.error(MISSING_FIELDS);
        return Ok(());
    };
    let amount = parse_decimal(amount)?;
    let date = parse_date(&date)?.to_string();

    match ledger.add(SpendingInput::new(amount, category, date)) {
        Ok(rec) => {
            println!(
                "Recorded {} for '{}' on {} (id {})",
                fmt_rupees(&rec.amount),
                rec.category,
                rec.date,
                rec.id
            );
            notifier.success("New spending added successfully!");
        }
        Err(e) => report(notifier, e),
    }
    Ok(())
}

pub fn edit<S: SlotStore>(
    ledger: &mut Ledger<S>,
    notifier: &mut Notifier,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("id is required"))?;
    let Some(existing) = ledger.get(id).cloned() else {
        report(notifier, LedgerError::NotFound(id));
        return Ok(());
    };

    let amount = match field(sub, "amount") {
        Some(a) => parse_decimal(a)?,
        None => existing.amount,
    };
    let category = field(sub, "category").unwrap_or(existing.category.as_str());
    // stored in canonical YYYY-MM-DD form
    let date = parse_date(field(sub, "date").unwrap_or(existing.date.as_str()))?.to_string();

    match ledger.update(id, SpendingInput::new(amount, category, date)) {
        Ok(_) => {
            notifier.success("Spending updated successfully!");
        }
        Err(e) => report(notifier, e),
    }
    Ok(())
}

pub fn remove<S: SlotStore>(
    ledger: &mut Ledger<S>,
    notifier: &mut Notifier,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let id = *sub
        .get_one::<i64>("id")
        .ok_or_else(|| anyhow::anyhow!("id is required"))?;
    match ledger.remove(id) {
        Ok(()) => {
            notifier.success("Spending deleted successfully!");
        }
        Err(e) => report(notifier, e),
    }
    Ok(())
}

pub fn clear<S: SlotStore>(
    ledger: &mut Ledger<S>,
    notifier: &mut Notifier,
    sub: &clap::ArgMatches,
) -> Result<()> {
    if !sub.get_flag("yes") {
        notifier.error("Refusing to clear all spending data without --yes");
        return Ok(());
    }
    match ledger.clear() {
        Ok(()) => {
            notifier.success("All data cleared successfully!");
        }
        Err(e) => report(notifier, e),
    }
    Ok(())
}

fn report(notifier: &mut Notifier, e: LedgerError) {
    let msg = match &e {
        LedgerError::Validation(_) => MISSING_FIELDS.to_string(),
        LedgerError::NotFound(id) => format!("No spending with id {}", id),
        LedgerError::IdSpaceExhausted | LedgerError::Persistence(_) => {
            format!("Error processing spending: {}", e)
        }
    };
    notifier.error(msg);
}
