//! CLI command handlers
//!
//! This module contains the interactive menu session and the one-shot
//! commands, bridging clap argument parsing with the service layer.

pub mod commands;
pub mod session;

pub use commands::{handle_ledger_command, EntryArgs, LedgerCommands};
pub use session::{run_interactive, Session};

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::storage::{Ledger, LoadReport};

/// Load the ledger and write user-facing notices about the outcome
///
/// Storage failures are reported and swallowed; the ledger stays empty and
/// the session carries on. The error is returned as `Some` for callers that
/// prefer to stop.
pub fn load_with_notices<W: Write>(
    ledger: &mut Ledger,
    out: &mut W,
) -> LedgerResult<Option<LedgerError>> {
    match ledger.load() {
        Ok(report) => {
            write_load_notices(&report, ledger, out)?;
            Ok(None)
        }
        Err(e) => {
            writeln!(out, "Error loading transactions: {}", e)?;
            Ok(Some(e))
        }
    }
}

fn write_load_notices<W: Write>(report: &LoadReport, ledger: &Ledger, out: &mut W) -> LedgerResult<()> {
    if report.first_run {
        writeln!(
            out,
            "No existing transaction file found at {}. Starting fresh.",
            ledger.path().display()
        )?;
    }
    if report.skipped > 0 {
        writeln!(
            out,
            "Skipped {} malformed line(s) in {}.",
            report.skipped,
            ledger.path().display()
        )?;
    }
    Ok(())
}
