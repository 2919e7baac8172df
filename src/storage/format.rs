//! Ledger file formats
//!
//! Two line formats are supported:
//! - `pipe`: the legacy `date|description|vendor|amount` format with no
//!   escaping. Text containing `|` corrupts the row.
//! - `csv`: RFC 4180 quoted CSV without a header, safe for arbitrary text.

use std::io::{BufRead, BufReader, Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::format_amount;
use crate::models::Transaction;

/// On-disk line format of the ledger file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Pipe-separated, unescaped (default, compatible with existing files)
    #[default]
    Pipe,
    /// Quoted CSV
    Csv,
}

/// Result of decoding a ledger file
#[derive(Debug, Clone, Default)]
pub struct Decoded {
    /// Successfully decoded transactions, in file order
    pub transactions: Vec<Transaction>,
    /// Number of malformed lines that were dropped
    pub skipped: usize,
}

impl StorageFormat {
    /// Decode every line from `reader`, skipping malformed ones
    ///
    /// Only I/O failures abort decoding.
    pub fn decode<R: Read>(&self, reader: R) -> LedgerResult<Decoded> {
        match self {
            Self::Pipe => decode_pipe(reader),
            Self::Csv => decode_csv(reader),
        }
    }

    /// Encode all transactions, oldest first
    pub fn encode<W: Write>(&self, transactions: &[Transaction], writer: W) -> LedgerResult<()> {
        match self {
            Self::Pipe => encode_pipe(transactions, writer),
            Self::Csv => encode_csv(transactions, writer),
        }
    }
}

fn decode_pipe<R: Read>(reader: R) -> LedgerResult<Decoded> {
    let mut decoded = Decoded::default();

    for (line_num, line) in BufReader::new(reader).split(b'\n').enumerate() {
        let mut bytes = line.map_err(|e| {
            LedgerError::Storage(format!("Failed to read line {}: {}", line_num + 1, e))
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let line = match String::from_utf8(bytes) {
            Ok(line) => line,
            Err(_) => {
                log::warn!("Skipping line {}: not valid UTF-8", line_num + 1);
                decoded.skipped += 1;
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match Transaction::from_line(&line) {
            Some(txn) => decoded.transactions.push(txn),
            None => decoded.skipped += 1,
        }
    }

    Ok(decoded)
}

fn encode_pipe<W: Write>(transactions: &[Transaction], mut writer: W) -> LedgerResult<()> {
    for txn in transactions {
        writeln!(writer, "{}", txn.to_line())
            .map_err(|e| LedgerError::Storage(format!("Failed to write transaction: {}", e)))?;
    }
    Ok(())
}

fn decode_csv<R: Read>(reader: R) -> LedgerResult<Decoded> {
    let mut decoded = Decoded::default();
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(LedgerError::Storage(format!("Failed to read ledger: {}", e)))
            }
            Err(e) => {
                log::warn!("Skipping unreadable CSV record: {}", e);
                decoded.skipped += 1;
                continue;
            }
        };

        if record.len() != 4 {
            log::debug!("Skipping CSV record with {} field(s)", record.len());
            decoded.skipped += 1;
            continue;
        }

        let source = record.iter().collect::<Vec<_>>().join(",");
        match Transaction::from_fields(&record[0], &record[1], &record[2], &record[3], &source) {
            Some(txn) => decoded.transactions.push(txn),
            None => decoded.skipped += 1,
        }
    }

    Ok(decoded)
}

fn encode_csv<W: Write>(transactions: &[Transaction], writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for txn in transactions {
        csv_writer.write_record([
            txn.date(),
            txn.description(),
            txn.vendor(),
            format_amount(txn.amount()).as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush ledger: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new("2024-03-01", "Paycheck", "Employer", 2500.0),
            Transaction::new("2024-03-02", "Groceries", "Market", -82.4),
        ]
    }

    #[test]
    fn test_pipe_encode() {
        let mut out = Vec::new();
        StorageFormat::Pipe.encode(&sample(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2024-03-01|Paycheck|Employer|2500.0\n2024-03-02|Groceries|Market|-82.4\n"
        );
    }

    #[test]
    fn test_pipe_decode_skips_malformed_lines() {
        let input = "2024-03-01|Paycheck|Employer|2500.0\n\
                     a|b|c\n\
                     \n\
                     a|b|c|notanumber\n\
                     2024-03-02|Groceries|Market|-82.4\n";

        let decoded = StorageFormat::Pipe.decode(input.as_bytes()).unwrap();
        assert_eq!(decoded.transactions, sample());
        assert_eq!(decoded.skipped, 2);
    }

    #[test]
    fn test_pipe_decode_crlf() {
        let input = "2024-03-01|Paycheck|Employer|2500.0\r\n";
        let decoded = StorageFormat::Pipe.decode(input.as_bytes()).unwrap();
        assert_eq!(decoded.transactions[0].amount(), 2500.0);
    }

    #[test]
    fn test_pipe_decode_skips_invalid_utf8_line() {
        let input: &[u8] = b"2024-03-01|Pay|Boss|100.0\n\
                             2024-03-02|Caf\xe9|Shop|-4.0\n\
                             2024-03-03|Rent|Landlord|-900.0\n";

        let decoded = StorageFormat::Pipe.decode(input).unwrap();
        let descriptions: Vec<_> = decoded
            .transactions
            .iter()
            .map(|t| t.description())
            .collect();
        assert_eq!(descriptions, vec!["Pay", "Rent"]);
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_csv_decode_skips_invalid_utf8_record() {
        let input: &[u8] = b"2024-03-01,Pay,Boss,100.0\n\
                             2024-03-02,Caf\xe9,Shop,-4.0\n\
                             2024-03-03,Rent,Landlord,-900.0\n";

        let decoded = StorageFormat::Csv.decode(input).unwrap();
        assert_eq!(decoded.transactions.len(), 2);
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_csv_preserves_separators_in_text() {
        let tricky = vec![Transaction::new(
            "2024-03-05",
            "Dinner | drinks, \"tip\"",
            "Joe's, Inc",
            -61.25,
        )];

        let mut out = Vec::new();
        StorageFormat::Csv.encode(&tricky, &mut out).unwrap();

        let decoded = StorageFormat::Csv.decode(out.as_slice()).unwrap();
        assert_eq!(decoded.transactions, tricky);
        assert_eq!(decoded.skipped, 0);
    }

    #[test]
    fn test_csv_decode_skips_malformed_records() {
        let input = "2024-03-01,Paycheck,Employer,2500.0\n\
                     only,three,fields\n\
                     2024-03-02,Groceries,Market,lots\n";

        let decoded = StorageFormat::Csv.decode(input.as_bytes()).unwrap();
        assert_eq!(decoded.transactions.len(), 1);
        assert_eq!(decoded.skipped, 2);
    }

    #[test]
    fn test_format_serde_names() {
        assert_eq!(
            serde_json::to_string(&StorageFormat::Csv).unwrap(),
            "\"csv\""
        );
        let parsed: StorageFormat = serde_json::from_str("\"pipe\"").unwrap();
        assert_eq!(parsed, StorageFormat::Pipe);
    }
}
