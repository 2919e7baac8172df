//! Interactive menu session
//!
//! Drives the home, ledger and reports screens over any line reader and
//! writer. The ledger, clock and I/O handles are owned by the session value
//! and passed explicitly; nothing is global.

use std::io::{self, BufRead, Write};

use crate::display::format_transaction_table;
use crate::error::LedgerResult;
use crate::models::{ReportPeriod, TransactionKind};
use crate::reports::{Clock, LedgerQuery};
use crate::services::{CreateEntryInput, EntryService};
use crate::storage::Ledger;

/// Whether a screen wants the session to keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input is exhausted or the user chose to exit
    Quit,
}

/// One interactive ledger session
pub struct Session<'a, R, W> {
    ledger: &'a mut Ledger,
    clock: &'a dyn Clock,
    input: R,
    output: W,
    currency_symbol: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        ledger: &'a mut Ledger,
        clock: &'a dyn Clock,
        input: R,
        output: W,
        currency_symbol: impl Into<String>,
    ) -> Self {
        Self {
            ledger,
            clock,
            input,
            output,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Run the home screen until the user exits or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            writeln!(self.output, "\n*** Home Screen ***")?;
            writeln!(self.output, "D) Add Deposit")?;
            writeln!(self.output, "P) Make Payment (Debit)")?;
            writeln!(self.output, "L) Ledger")?;
            writeln!(self.output, "X) Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let flow = match choice.to_uppercase().as_str() {
                "D" => self.add_transaction(TransactionKind::Deposit)?,
                "P" => self.add_transaction(TransactionKind::Payment)?,
                "L" => self.ledger_screen()?,
                "X" => Flow::Quit,
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Consume the session and hand back its writer
    pub fn into_output(self) -> W {
        self.output
    }

    fn add_transaction(&mut self, kind: TransactionKind) -> LedgerResult<Flow> {
        writeln!(self.output, "\n*** Add {} ***", kind)?;

        let Some(date) = self.prompt("Date (YYYY-MM-DD, blank for today): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(vendor) = self.prompt("Vendor: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(amount) = self.prompt("Amount: ")? else {
            return Ok(Flow::Quit);
        };

        let input = CreateEntryInput {
            kind,
            date: Some(date),
            description,
            vendor,
            amount,
        };

        match EntryService::new(self.ledger, self.clock).create(input) {
            Ok(_) => writeln!(self.output, "{} recorded successfully.", kind)?,
            Err(e) if e.is_validation() => writeln!(
                self.output,
                "Invalid amount. Please enter a number greater than zero."
            )?,
            Err(e) => writeln!(self.output, "Error saving transactions: {}", e)?,
        }

        Ok(Flow::Continue)
    }

    fn ledger_screen(&mut self) -> LedgerResult<Flow> {
        loop {
            writeln!(self.output, "\n*** Ledger Screen ***")?;
            writeln!(self.output, "A) All")?;
            writeln!(self.output, "D) Deposits")?;
            writeln!(self.output, "P) Payments")?;
            writeln!(self.output, "R) Reports")?;
            writeln!(self.output, "H) Home - go back to the home page")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(Flow::Quit);
            };

            match choice.to_uppercase().as_str() {
                "A" => self.show(&LedgerQuery::All)?,
                "D" => self.show(&LedgerQuery::Deposits)?,
                "P" => self.show(&LedgerQuery::Payments)?,
                "R" => {
                    if self.reports_screen()? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                "H" => return Ok(Flow::Continue),
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    fn reports_screen(&mut self) -> LedgerResult<Flow> {
        loop {
            writeln!(self.output, "\n*** Reports ***")?;
            for (i, period) in ReportPeriod::all().iter().enumerate() {
                writeln!(self.output, "{}) {}", i + 1, period)?;
            }
            writeln!(self.output, "5) Search by Vendor")?;
            writeln!(self.output, "0) Back - go back to the ledger page")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(Flow::Quit);
            };

            match choice.as_str() {
                "1" => self.show(&LedgerQuery::Period(ReportPeriod::MonthToDate))?,
                "2" => self.show(&LedgerQuery::Period(ReportPeriod::PreviousMonth))?,
                "3" => self.show(&LedgerQuery::Period(ReportPeriod::YearToDate))?,
                "4" => self.show(&LedgerQuery::Period(ReportPeriod::PreviousYear))?,
                "5" => {
                    let Some(vendor) = self.prompt("Enter vendor name: ")? else {
                        return Ok(Flow::Quit);
                    };
                    self.show(&LedgerQuery::Vendor(vendor))?;
                }
                "0" => return Ok(Flow::Continue),
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
        }
    }

    fn show(&mut self, query: &LedgerQuery) -> LedgerResult<()> {
        let results = query.run(self.ledger.transactions(), self.clock.today());
        let table = format_transaction_table(results, &query.title(), &self.currency_symbol);
        write!(self.output, "{}", table)?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line, `None` at end of input
    ///
    /// Bytes that aren't UTF-8 become U+FFFD, so they read as an invalid
    /// choice or amount instead of ending the session.
    fn prompt(&mut self, label: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}

/// Run an interactive session on the process's stdin and stdout
pub fn run_interactive(
    ledger: &mut Ledger,
    clock: &dyn Clock,
    currency_symbol: &str,
) -> LedgerResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(ledger, clock, stdin.lock(), stdout.lock(), currency_symbol).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use crate::reports::FixedClock;
    use crate::storage::StorageFormat;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn run_script(ledger: &mut Ledger, script: &str) -> String {
        let clock = clock();
        let mut session = Session::new(ledger, &clock, Cursor::new(script.to_string()), Vec::new(), "$");
        session.run().unwrap();
        String::from_utf8(session.into_output()).unwrap()
    }

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::new(temp_dir.path().join("transactions.csv"), StorageFormat::Pipe);
        (temp_dir, ledger)
    }

    #[test]
    fn test_deposit_and_payment_through_menu() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        let output = run_script(
            &mut ledger,
            "d\n2024-03-01\nPaycheck\nEmployer\n100.0\n\
             P\n\nGroceries\nMarket\n40\n\
             x\n",
        );

        assert!(output.contains("Deposit recorded successfully."));
        assert!(output.contains("Payment (Debit) recorded successfully."));

        let transactions = ledger.transactions();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount(), 100.0);
        assert_eq!(transactions[1].amount(), -40.0);
        assert_eq!(transactions[1].date(), "2024-03-15");
    }

    #[test]
    fn test_invalid_amount_returns_to_home() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        let output = run_script(&mut ledger, "D\n2024-03-01\nGift\nAunt\n-5\nX\n");

        assert!(output.contains("Invalid amount. Please enter a number greater than zero."));
        assert!(ledger.is_empty());
        assert!(!ledger.path().exists());
    }

    #[test]
    fn test_ledger_views_show_newest_first() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.append(Transaction::new("2024-03-10", "R1", "V", 1.0)).unwrap();
        ledger.append(Transaction::new("2023-01-01", "R2", "V", -2.0)).unwrap();
        ledger.append(Transaction::new("2024-02-01", "R3", "V", 3.0)).unwrap();

        let output = run_script(&mut ledger, "L\nA\nD\nH\nX\n");

        let all = &output[output.find("--- All Transactions ---").unwrap()..];
        let r1 = all.find("R1").unwrap();
        let r2 = all.find("R2").unwrap();
        let r3 = all.find("R3").unwrap();
        assert!(r3 < r2 && r2 < r1);

        let deposits = &output[output.find("--- Deposits ---").unwrap()..];
        assert!(!deposits.contains("R2"));
    }

    #[test]
    fn test_reports_menu() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        ledger.append(Transaction::new("2024-03-01", "This month", "Acme", -10.0)).unwrap();
        ledger.append(Transaction::new("2024-02-29", "Last month", "Other", -20.0)).unwrap();

        let output = run_script(&mut ledger, "L\nR\n1\n5\nacme\n0\nH\nX\n");

        let mtd = &output[output.find("--- Month To Date ---").unwrap()..];
        let mtd = &mtd[..mtd.find("*** Reports ***").unwrap()];
        assert!(mtd.contains("This month"));
        assert!(!mtd.contains("Last month"));

        let search = &output[output.find("--- Transactions for Vendor: acme ---").unwrap()..];
        assert!(search.contains("This month"));
        assert!(!search.contains("Last month"));
    }

    #[test]
    fn test_non_utf8_input_is_an_invalid_option() {
        let (_temp_dir, mut ledger) = create_test_ledger();
        let clock = clock();
        let script = b"\xff\xfe\nD\n2024-03-01\nGift\nAunt\n1\xe9\nX\n".to_vec();

        let mut session = Session::new(&mut ledger, &clock, Cursor::new(script), Vec::new(), "$");
        session.run().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();

        assert!(output.contains("Invalid option. Please try again."));
        assert!(output.contains("Invalid amount. Please enter a number greater than zero."));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_option_and_end_of_input() {
        let (_temp_dir, mut ledger) = create_test_ledger();

        // No exit command: running out of input ends the session
        let output = run_script(&mut ledger, "Q\nL\n");

        assert!(output.contains("Invalid option. Please try again."));
        assert!(output.contains("*** Ledger Screen ***"));
    }
}
