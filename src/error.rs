// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors surfaced by the ledger store and its storage backends.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required field was blank.
    #[error("missing required field: {0}")]
    Validation(String),

    #[error("no spending with id {0}")]
    NotFound(i64),

    /// Every id up to `i64::MAX` is taken.
    #[error("no spending id left to allocate")]
    IdSpaceExhausted,

    /// Serializing, reading or writing the persisted slot failed.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        LedgerError::Persistence(e.to_string())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(e: rusqlite::Error) -> Self {
        LedgerError::Persistence(e.to_string())
    }
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
