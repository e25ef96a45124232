// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod db;
pub mod error;
pub mod ledger;
pub mod models;
pub mod notify;
pub mod storage;
pub mod utils;
pub mod commands;

pub use error::{LedgerError, LedgerResult};
pub use ledger::{Hydration, Ledger, STORAGE_KEY};
pub use models::{MonthGroup, MonthGroupedView, SpendingInput, SpendingRecord};
pub use storage::{MemoryStore, SlotStore};
