//! Core data models for the ledger
//!
//! This module contains the data structures that represent the ledger
//! domain: transactions and report periods.

pub mod period;
pub mod transaction;

pub use period::{DateWindow, PeriodParseError, ReportPeriod, DATE_FORMAT};
pub use transaction::{Transaction, TransactionKind};
