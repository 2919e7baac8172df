//! One-shot ledger commands
//!
//! Non-interactive counterparts of the menu actions, for scripting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::display::format_transaction_table;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_ledger_json, export_transactions_csv, ExportFormat};
use crate::models::{ReportPeriod, TransactionKind};
use crate::reports::{Clock, LedgerQuery};
use crate::services::{CreateEntryInput, EntryService};
use crate::storage::Ledger;

/// Arguments shared by `deposit` and `payment`
#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Amount, a positive number (payments are stored negated)
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Description
    #[arg(short = 'm', long, default_value = "")]
    pub description: String,
    /// Vendor name
    #[arg(short, long, default_value = "")]
    pub vendor: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Record a deposit
    Deposit(EntryArgs),

    /// Record a payment (debit)
    #[command(alias = "debit")]
    Payment(EntryArgs),

    /// List transactions, newest entry first
    #[command(alias = "ls")]
    List {
        /// Only deposits
        #[arg(long, conflicts_with = "payments")]
        deposits: bool,
        /// Only payments
        #[arg(long)]
        payments: bool,
    },

    /// Show a period report (month-to-date, previous-month, year-to-date, previous-year)
    Report {
        /// Report period
        period: String,
    },

    /// Show transactions for one vendor (case-insensitive exact match)
    Search {
        /// Vendor name
        vendor: String,
    },

    /// Export the ledger
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a ledger command against a loaded ledger
pub fn handle_ledger_command(
    ledger: &mut Ledger,
    clock: &dyn Clock,
    currency_symbol: &str,
    cmd: LedgerCommands,
) -> LedgerResult<()> {
    match cmd {
        LedgerCommands::Deposit(args) => record(ledger, clock, TransactionKind::Deposit, args),
        LedgerCommands::Payment(args) => record(ledger, clock, TransactionKind::Payment, args),
        LedgerCommands::List { deposits, payments } => {
            let query = if deposits {
                LedgerQuery::Deposits
            } else if payments {
                LedgerQuery::Payments
            } else {
                LedgerQuery::All
            };
            print_query(ledger, clock, currency_symbol, &query);
            Ok(())
        }
        LedgerCommands::Report { period } => {
            let period = ReportPeriod::parse(&period)
                .map_err(|e| LedgerError::Validation(e.to_string()))?;
            print_query(ledger, clock, currency_symbol, &LedgerQuery::Period(period));
            Ok(())
        }
        LedgerCommands::Search { vendor } => {
            print_query(ledger, clock, currency_symbol, &LedgerQuery::Vendor(vendor));
            Ok(())
        }
        LedgerCommands::Export { format, output } => export(ledger, format, output),
    }
}

fn record(
    ledger: &mut Ledger,
    clock: &dyn Clock,
    kind: TransactionKind,
    args: EntryArgs,
) -> LedgerResult<()> {
    let txn = EntryService::new(ledger, clock).create(CreateEntryInput {
        kind,
        date: args.date,
        description: args.description,
        vendor: args.vendor,
        amount: args.amount,
    })?;

    println!("{} recorded: {}", kind, txn);
    Ok(())
}

fn print_query(ledger: &Ledger, clock: &dyn Clock, currency_symbol: &str, query: &LedgerQuery) {
    let results = query.run(ledger.transactions(), clock.today());
    print!(
        "{}",
        format_transaction_table(results, &query.title(), currency_symbol)
    );
}

fn export(ledger: &Ledger, format: ExportFormat, output: Option<PathBuf>) -> LedgerResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                LedgerError::Io(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(ledger, format, &mut writer)?;
            writer.flush()?;
            println!(
                "Exported {} transaction(s) to: {}",
                ledger.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(ledger, format, &mut writer)?;
        }
    }
    Ok(())
}

fn write_export<W: Write>(ledger: &Ledger, format: ExportFormat, writer: &mut W) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_transactions_csv(ledger.transactions(), writer),
        ExportFormat::Json => export_ledger_json(ledger.transactions(), writer),
    }
}
