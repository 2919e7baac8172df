//! Service layer for the ledger
//!
//! Business logic that sits between the command surfaces and storage.

pub mod entry;

pub use entry::{parse_entry_amount, CreateEntryInput, EntryService};
