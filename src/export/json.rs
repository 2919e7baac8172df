//! JSON Export functionality
//!
//! Exports the whole ledger as a single JSON document with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of transactions in the export
    pub transaction_count: usize,

    /// All transactions, in entry order
    pub transactions: Vec<Transaction>,
}

impl LedgerExport {
    pub fn new(transactions: &[Transaction]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction_count: transactions.len(),
            transactions: transactions.to_vec(),
        }
    }
}

/// Export transactions to pretty-printed JSON
pub fn export_ledger_json<W: Write>(transactions: &[Transaction], writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::new(transactions);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer).map_err(|e| LedgerError::Io(e.to_string()))?;
    Ok(())
}
