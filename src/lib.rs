//! ledger-cli - Terminal-based personal transaction ledger
//!
//! This library provides the core functionality for the `ledger` binary: a
//! flat-file record of deposits and payments with listing, sign filters,
//! period reports and vendor search.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Base directory and settings management
//! - `error`: Custom error types
//! - `models`: Transactions and report periods
//! - `storage`: Ledger file formats and the in-memory store
//! - `reports`: Ledger queries and period filters
//! - `services`: Entry validation and recording
//! - `display`: Terminal table rendering
//! - `export`: CSV and JSON export
//! - `cli`: Interactive menu session and one-shot commands
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_cli::models::ReportPeriod;
//! use ledger_cli::reports::LedgerQuery;
//! use ledger_cli::storage::{Ledger, StorageFormat};
//!
//! let mut ledger = Ledger::new("transactions.csv", StorageFormat::Pipe);
//! ledger.load()?;
//! let recent = LedgerQuery::Period(ReportPeriod::MonthToDate).run(ledger.transactions(), today);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::LedgerError;
