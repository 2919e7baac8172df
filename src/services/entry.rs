//! Entry service
//!
//! Validates user input for new deposits and payments and records them in
//! the ledger. Payments are negated here, exactly once.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionKind, DATE_FORMAT};
use crate::reports::Clock;
use crate::storage::Ledger;

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateEntryInput {
    pub kind: TransactionKind,
    /// Entry date; blank or `None` means today
    pub date: Option<String>,
    pub description: String,
    pub vendor: String,
    /// Amount as typed by the user, always positive
    pub amount: String,
}

/// Service for recording deposits and payments
pub struct EntryService<'a> {
    ledger: &'a mut Ledger,
    clock: &'a dyn Clock,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(ledger: &'a mut Ledger, clock: &'a dyn Clock) -> Self {
        Self { ledger, clock }
    }

    /// Validate, build and append a transaction, then save the ledger
    ///
    /// Nothing is recorded when validation fails. When only the save fails
    /// the transaction remains in the session and the storage error is
    /// returned.
    pub fn create(&mut self, input: CreateEntryInput) -> LedgerResult<Transaction> {
        let amount = parse_entry_amount(&input.amount)?;
        let signed = match input.kind {
            TransactionKind::Deposit => amount,
            TransactionKind::Payment => -amount,
        };

        let date = match input.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => self.clock.today().format(DATE_FORMAT).to_string(),
        };

        let txn = Transaction::new(
            date,
            input.description.trim(),
            input.vendor.trim(),
            signed,
        );

        self.ledger.append(txn.clone())?;
        log::info!("Recorded {}: {}", input.kind, txn);

        Ok(txn)
    }
}

/// Parse a user-entered amount, which must be a finite number above zero
pub fn parse_entry_amount(s: &str) -> LedgerResult<f64> {
    let s = s.trim();
    let amount: f64 = s
        .parse()
        .map_err(|_| LedgerError::Validation(format!("Invalid amount: '{}'", s)))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(LedgerError::Validation(format!(
            "Amount must be greater than zero: '{}'",
            s
        )));
    }

    Ok(amount)
}
