//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-friendly CSV file with a header row.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Export transactions to CSV, in entry order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Date", "Description", "Vendor", "Type", "Amount"])?;

    for txn in transactions {
        let kind = txn.kind().map(|k| k.to_string()).unwrap_or_default();
        csv_writer.write_record([
            txn.date(),
            txn.description(),
            txn.vendor(),
            kind.as_str(),
            format!("{:.2}", txn.amount()).as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush CSV export: {}", e)))
}
