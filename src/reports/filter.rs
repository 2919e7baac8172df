//! Transaction filters
//!
//! Every filter is an order-preserving pass over a slice and returns a fresh
//! `Vec`; the store is never modified or aliased.

use chrono::NaiveDate;

use crate::models::{ReportPeriod, Transaction, DATE_FORMAT};

/// Keep deposits (`positive`) or payments (`!positive`)
///
/// Comparison is strict, so zero amounts match neither.
pub fn filter_by_sign(transactions: &[Transaction], positive: bool) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| {
            if positive {
                t.is_deposit()
            } else {
                t.is_payment()
            }
        })
        .cloned()
        .collect()
}

/// Keep transactions whose vendor equals `needle`, ignoring case
pub fn filter_by_vendor(transactions: &[Transaction], needle: &str) -> Vec<Transaction> {
    let needle = needle.to_lowercase();
    transactions
        .iter()
        .filter(|t| t.vendor().to_lowercase() == needle)
        .cloned()
        .collect()
}

/// Keep transactions dated inside the period's window relative to `today`
///
/// Transactions whose date doesn't parse as `YYYY-MM-DD` are left out.
pub fn filter_by_period(
    transactions: &[Transaction],
    period: ReportPeriod,
    today: NaiveDate,
) -> Vec<Transaction> {
    let window = period.window(today);
    transactions
        .iter()
        .filter(|t| parse_date(t.date()).is_some_and(|date| window.contains(date)))
        .cloned()
        .collect()
}

/// Parse a transaction date, `None` if it isn't a real calendar date
///
/// Only the exact `dddd-dd-dd` shape is accepted: no padding-free months or
/// days, no surrounding whitespace and no year sign.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let well_formed = date.len() == 10
        && date.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}
