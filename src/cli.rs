// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn spending_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("amount").long("amount").short('a').help("Amount spent"))
        .arg(
            Arg::new("category")
                .long("category")
                .short('c')
                .help("Free-text category, e.g. Groceries"),
        )
        .arg(Arg::new("date").long("date").short('d').help("YYYY-MM-DD"))
}

pub fn build_cli() -> Command {
    Command::new("spendbook")
        .about("Record spendings and review them month by month")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("SQLite file holding the ledger (default: platform data dir)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(spending_fields(
            Command::new("add").about("Record a new spending (date defaults to today)"),
        ))
        .subcommand(spending_fields(
            Command::new("edit")
                .about("Change a spending; omitted fields keep their value")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                ),
        ))
        .subcommand(
            Command::new("rm").about("Delete a spending").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(value_parser!(i64)),
            ),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete all spendings; the sample data returns on next start")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm; this cannot be undone"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("Show spendings grouped by month with totals")
                .arg(
                    Arg::new("search")
                        .long("search")
                        .short('s')
                        .help("Match category (case-insensitive) or date text"),
                ),
        ))
        .subcommand(
            Command::new("export")
                .about("Write all spendings to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
}
