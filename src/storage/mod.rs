//! Storage layer for the ledger
//!
//! Provides the line-oriented ledger file with atomic rewrites and the
//! in-memory store that owns every transaction of a session.

pub mod file_io;
pub mod format;
pub mod ledger;

pub use file_io::{read_ledger, write_atomic, write_ledger};
pub use format::{Decoded, StorageFormat};
pub use ledger::{Ledger, LoadReport};

use crate::config::{LedgerPaths, Settings};

/// Open (but don't load) the ledger configured by `settings`
pub fn open_ledger(paths: &LedgerPaths, settings: &Settings) -> Ledger {
    Ledger::new(paths.ledger_file(settings), settings.storage_format)
}
