//! Export module for the ledger
//!
//! - CSV: spreadsheet-compatible, with a header row
//! - JSON: machine-readable full ledger export

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};

use clap::ValueEnum;

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
