//! Transaction display formatting
//!
//! Renders ledger views as bordered tables, most recently entered first.

use crate::models::Transaction;

const DATE_WIDTH: usize = 10;
const DESCRIPTION_WIDTH: usize = 25;
const VENDOR_WIDTH: usize = 15;
const AMOUNT_WIDTH: usize = 10;

/// Order a result set for display: most recently entered first
///
/// This reverses entry order; it never sorts by the `date` field.
pub fn sort_for_display(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.reverse();
    transactions
}

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str) -> String {
    format!(
        "| {:<dw$} | {:<sw$} | {:<vw$} | {}{:>aw$} |",
        truncate(txn.date(), DATE_WIDTH),
        truncate(txn.description(), DESCRIPTION_WIDTH),
        truncate(txn.vendor(), VENDOR_WIDTH),
        currency_symbol,
        format_grouped(txn.amount()),
        dw = DATE_WIDTH,
        sw = DESCRIPTION_WIDTH,
        vw = VENDOR_WIDTH,
        aw = AMOUNT_WIDTH,
    )
}

/// Format a titled table of transactions in display order
pub fn format_transaction_table(
    transactions: Vec<Transaction>,
    title: &str,
    currency_symbol: &str,
) -> String {
    let mut output = format!("\n--- {} ---\n", title);

    let sorted = sort_for_display(transactions);
    if sorted.is_empty() {
        output.push_str("No transactions found for this view.\n");
        return output;
    }

    let border = border_line(currency_symbol);
    output.push_str(&border);
    output.push_str(&format!(
        "| {:^dw$} | {:^sw$} | {:^vw$} | {:^aw$} |\n",
        "Date",
        "Description",
        "Vendor",
        "Amount",
        dw = DATE_WIDTH,
        sw = DESCRIPTION_WIDTH,
        vw = VENDOR_WIDTH,
        aw = AMOUNT_WIDTH + currency_symbol.chars().count(),
    ));
    output.push_str(&border);

    for txn in &sorted {
        output.push_str(&format_transaction_row(txn, currency_symbol));
        output.push('\n');
    }
    output.push_str(&border);

    output
}

fn border_line(currency_symbol: &str) -> String {
    let amount_width = AMOUNT_WIDTH + currency_symbol.chars().count();
    format!(
        "+{}+{}+{}+{}+\n",
        "-".repeat(DATE_WIDTH + 2),
        "-".repeat(DESCRIPTION_WIDTH + 2),
        "-".repeat(VENDOR_WIDTH + 2),
        "-".repeat(amount_width + 2),
    )
}

/// Format an amount with two decimals and thousands separators
pub fn format_grouped(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_for_display_reverses_entry_order() {
        // Dates deliberately out of order: display follows entry order only
        let r1 = Transaction::new("2024-03-10", "R1", "V", 1.0);
        let r2 = Transaction::new("2023-01-01", "R2", "V", 2.0);
        let r3 = Transaction::new("2024-12-31", "R3", "V", 3.0);

        let sorted = sort_for_display(vec![r1.clone(), r2.clone(), r3.clone()]);
        assert_eq!(sorted, vec![r3, r2, r1]);
    }

    #[test]
    fn test_format_transaction_row() {
        let txn = Transaction::new("2024-03-15", "Office chair", "Furniture Co", -1234.5);
        let row = format_transaction_row(&txn, "$");

        assert!(row.starts_with("| 2024-03-15 | Office chair"));
        assert!(row.contains("| Furniture Co    |"));
        assert!(row.ends_with("$ -1,234.50 |"));
    }

    #[test]
    fn test_format_table_newest_first() {
        let transactions = vec![
            Transaction::new("2024-03-01", "First", "V", 1.0),
            Transaction::new("2024-03-02", "Second", "V", 2.0),
        ];

        let table = format_transaction_table(transactions, "All Transactions", "$");
        assert!(table.contains("--- All Transactions ---"));
        let first = table.find("First").unwrap();
        let second = table.find("Second").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_format_empty_table() {
        let table = format_transaction_table(Vec::new(), "Deposits", "$");
        assert!(table.contains("No transactions found for this view."));
        assert!(!table.contains("+---"));
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0.00");
        assert_eq!(format_grouped(999.999), "1,000.00");
        assert_eq!(format_grouped(1234567.891), "1,234,567.89");
        assert_eq!(format_grouped(-40.0), "-40.00");
        assert_eq!(format_grouped(-0.001), "0.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        let result = truncate("A very long description indeed", 10);
        assert_eq!(result, "A very ...");
        assert_eq!(truncate("Café crème brûlée", 8), "Café ...");
    }
}
