//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{format_transaction_row, format_transaction_table, sort_for_display};
