// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use spendbook::notify::Notifier;
use spendbook::{Hydration, Ledger, cli, commands, db};

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    init_logger(matches.get_count("verbose"));

    let store = db::open_or_init(matches.get_one::<PathBuf>("db").map(PathBuf::as_path))?;
    let mut ledger = Ledger::open(store);
    let mut notifier = Notifier::default();
    if let Hydration::Recovered(e) = ledger.hydration() {
        let shown = notifier.error(format!(
            "Saved spendings could not be read, showing sample data ({})",
            e
        ));
        if let Some(n) = notifier.latest() {
            eprintln!("{}", n);
        }
        notifier.fire(shown);
    }
    debug!(records = ledger.len(), "ledger ready");

    match matches.subcommand() {
        Some(("init", _)) => match matches.get_one::<PathBuf>("db") {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Database initialized at {}", db::db_path()?.display()),
        },
        Some(("add", sub)) => commands::spendings::add(&mut ledger, &mut notifier, sub)?,
        Some(("edit", sub)) => commands::spendings::edit(&mut ledger, &mut notifier, sub)?,
        Some(("rm", sub)) => commands::spendings::remove(&mut ledger, &mut notifier, sub)?,
        Some(("clear", sub)) => commands::spendings::clear(&mut ledger, &mut notifier, sub)?,
        Some(("list", sub)) => commands::reports::list(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }

    if let Some(n) = notifier.latest() {
        println!("{}", n);
    }
    Ok(())
}
