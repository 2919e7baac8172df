//! Transaction model
//!
//! A single ledger entry. The sign of the amount encodes its kind: positive
//! amounts are deposits, negative amounts are payments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field separator of the legacy line format
pub const FIELD_SEPARATOR: char = '|';

/// Kind of a transaction, derived from the sign of its amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Incoming funds (amount > 0)
    Deposit,
    /// Outgoing funds (amount < 0)
    Payment,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Payment => write!(f, "Payment (Debit)"),
        }
    }
}

/// A financial transaction
///
/// Fields are private; a transaction never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date as entered (`YYYY-MM-DD`), validated only when filtering
    date: String,

    /// Free-text description
    description: String,

    /// Vendor name
    vendor: String,

    /// Signed amount (positive for deposits, negative for payments)
    amount: f64,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// No validation is performed; the caller owns the sign convention.
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        vendor: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            vendor: vendor.into(),
            amount,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Check if this is a deposit (strictly positive amount)
    pub fn is_deposit(&self) -> bool {
        self.amount > 0.0
    }

    /// Check if this is a payment (strictly negative amount)
    pub fn is_payment(&self) -> bool {
        self.amount < 0.0
    }

    /// Kind of this transaction, `None` for a zero amount
    pub fn kind(&self) -> Option<TransactionKind> {
        if self.is_deposit() {
            Some(TransactionKind::Deposit)
        } else if self.is_payment() {
            Some(TransactionKind::Payment)
        } else {
            None
        }
    }

    /// Encode as a `date|description|vendor|amount` line
    pub fn to_line(&self) -> String {
        format!(
            "{date}{sep}{description}{sep}{vendor}{sep}{amount}",
            date = self.date,
            description = self.description,
            vendor = self.vendor,
            amount = format_amount(self.amount),
            sep = FIELD_SEPARATOR,
        )
    }

    /// Decode a `date|description|vendor|amount` line
    ///
    /// Returns `None` when the line does not have exactly four fields or when
    /// the amount is not a number. The latter is logged.
    ///
    /// Empty fields count toward the four, trailing ones included, so
    /// `2024-03-01|Pay|Boss|100.0|` is rejected rather than read as a
    /// four-field line with the trailing empty field dropped.
    pub fn from_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if parts.len() != 4 {
            log::debug!("Skipping line with {} field(s): {}", parts.len(), line);
            return None;
        }

        Self::from_fields(parts[0], parts[1], parts[2], parts[3], line)
    }

    /// Build a transaction from already-split fields, parsing the amount
    pub(crate) fn from_fields(
        date: &str,
        description: &str,
        vendor: &str,
        amount: &str,
        source: &str,
    ) -> Option<Self> {
        match amount.trim().parse::<f64>() {
            Ok(amount) => Some(Self::new(date, description, vendor, amount)),
            Err(_) => {
                log::warn!("Error parsing amount in ledger line: {}", source);
                None
            }
        }
    }
}

/// Render an amount the way the ledger file stores it (`100.0`, `-40.5`)
pub fn format_amount(amount: f64) -> String {
    format!("{:?}", amount)
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2}",
            self.date, self.description, self.vendor, self.amount
        )
    }
}
