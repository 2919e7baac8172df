//! Ledger views and period reports
//!
//! A [`LedgerQuery`] describes one view over the ledger (all, deposits,
//! payments, a report period, or a vendor search). Running a query never
//! touches the store; it returns a new sequence in entry order.

pub mod clock;
pub mod filter;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::{filter_by_period, filter_by_sign, filter_by_vendor, parse_date};

use chrono::NaiveDate;

use crate::models::{ReportPeriod, Transaction};

/// A view over the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerQuery {
    /// Every transaction
    All,
    /// Transactions with a positive amount
    Deposits,
    /// Transactions with a negative amount
    Payments,
    /// Transactions dated inside a report period
    Period(ReportPeriod),
    /// Transactions from one vendor (case-insensitive exact match)
    Vendor(String),
}

impl LedgerQuery {
    /// Run the query against a snapshot of the ledger
    pub fn run(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<Transaction> {
        match self {
            Self::All => transactions.to_vec(),
            Self::Deposits => filter_by_sign(transactions, true),
            Self::Payments => filter_by_sign(transactions, false),
            Self::Period(period) => filter_by_period(transactions, *period, today),
            Self::Vendor(needle) => filter_by_vendor(transactions, needle),
        }
    }

    /// Title shown above the result table
    pub fn title(&self) -> String {
        match self {
            Self::All => "All Transactions".to_string(),
            Self::Deposits => "Deposits".to_string(),
            Self::Payments => "Payments (Debits)".to_string(),
            Self::Period(period) => period.title().to_string(),
            Self::Vendor(needle) => format!("Transactions for Vendor: {}", needle),
        }
    }
}
