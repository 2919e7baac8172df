//! Ledger store
//!
//! Holds every transaction of the session in entry order. The store only
//! grows; each append rewrites the whole ledger file.

use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

use super::file_io::{read_ledger, write_ledger};
use super::format::StorageFormat;

/// Outcome of loading the ledger file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Transactions decoded and added to the store
    pub loaded: usize,
    /// Malformed lines that were dropped
    pub skipped: usize,
    /// The ledger file did not exist yet
    pub first_run: bool,
}

/// In-memory ledger backed by a single file
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    format: StorageFormat,
    transactions: Vec<Transaction>,
    /// Cleared when the last load failed, so the file is never overwritten
    /// with a store that doesn't reflect it
    writable: bool,
}

impl Ledger {
    /// Create an empty ledger bound to `path`
    pub fn new(path: impl Into<PathBuf>, format: StorageFormat) -> Self {
        Self {
            path: path.into(),
            format,
            transactions: Vec::new(),
            writable: true,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Line format of the backing file
    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// Load transactions from disk, replacing the in-memory contents
    ///
    /// A missing file is a first run, not an error. On failure the in-memory
    /// contents are left as they were and saving is refused until a later
    /// load succeeds.
    pub fn load(&mut self) -> LedgerResult<LoadReport> {
        let read = read_ledger(&self.path, self.format);
        self.writable = read.is_ok();

        let Some(decoded) = read? else {
            log::info!("No ledger at {}, starting empty", self.path.display());
            self.transactions.clear();
            return Ok(LoadReport {
                loaded: 0,
                skipped: 0,
                first_run: true,
            });
        };

        if decoded.skipped > 0 {
            log::warn!(
                "Skipped {} malformed line(s) in {}",
                decoded.skipped,
                self.path.display()
            );
        }

        self.transactions = decoded.transactions;
        log::info!(
            "Loaded {} transaction(s) from {}",
            self.transactions.len(),
            self.path.display()
        );

        Ok(LoadReport {
            loaded: self.transactions.len(),
            skipped: decoded.skipped,
            first_run: false,
        })
    }

    /// Write every transaction to disk, oldest first, replacing the file
    pub fn save(&self) -> LedgerResult<()> {
        if !self.writable {
            return Err(LedgerError::Storage(format!(
                "Refusing to overwrite {}: it could not be loaded",
                self.path.display()
            )));
        }

        write_ledger(&self.path, self.format, &self.transactions)?;
        log::debug!(
            "Saved {} transaction(s) to {}",
            self.transactions.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Append a transaction and save immediately
    ///
    /// The transaction stays in memory even if the save fails.
    pub fn append(&mut self, txn: Transaction) -> LedgerResult<()> {
        self.transactions.push(txn);
        self.save()
    }

    /// All transactions in entry order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Count transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
