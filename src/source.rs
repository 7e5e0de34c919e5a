//! Record source: reads the entries of a tree from a comma separated file.
//!
//! The first row is a header and is skipped. Every other row holds the
//! identifier in its first column and the balance in its last one, so both
//! `identifier,balance` and `identifier,salt,balance` files are accepted.

use std::{fs, path::Path, str::FromStr};

use log::{debug, warn};
use num_bigint::BigInt;

use crate::{node::Entry, TreeError};

/// Reads and parses the entries stored in the csv file at `path`.
pub fn parse_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>, TreeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let entries = parse_entries_from_str(&text)?;
    debug!("read {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parses csv text into entries. Fails on the first malformed row: a partially
/// read list would commit to the wrong total.
pub fn parse_entries_from_str(text: &str) -> Result<Vec<Entry>, TreeError> {
    let mut entries = Vec::new();
    // row numbers are 1-based and count the header
    for (row, line) in text.lines().enumerate().skip(1).map(|(i, l)| (i + 1, l)) {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            warn!("skipping empty row {}", row);
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return Err(TreeError::InvalidParameter(format!(
                "row {row} has {} column(s), expected at least 2",
                fields.len()
            )));
        }
        let column = fields.len() - 1;
        let raw = fields[column].trim();
        let balance = BigInt::from_str(raw).map_err(|_| TreeError::MalformedBalance {
            row,
            column,
            value: raw.to_string(),
        })?;
        entries.push(Entry::new(fields[0], balance)?);
    }
    Ok(entries)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use num_bigint::{BigInt, BigUint};

    use super::{parse_entries, parse_entries_from_str};
    use crate::TreeError;

    #[test]
    fn test_parse_two_columns() {
        let entries = parse_entries_from_str("username,balance\nalice,10\nbob,20\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].identifier(), "alice");
        assert_eq!(entries[1].balance(), &BigUint::from(20u32));
    }

    #[test]
    fn test_parse_with_salt_and_crlf() {
        let entries =
            parse_entries_from_str("username,salt,balance\r\nalice,123,10\r\nbob,456,20\r\n")
                .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].balance(), &BigUint::from(10u32));
        assert_eq!(entries[1].identifier(), "bob");
    }

    #[test]
    fn test_parse_skips_blank_rows() {
        let entries = parse_entries_from_str("username,balance\nalice,1\n\nbob,2").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_parse_malformed_balance() {
        assert_eq!(
            parse_entries_from_str("username,balance\nalice,10\nbob,ten\n").unwrap_err(),
            TreeError::MalformedBalance {
                row: 3,
                column: 1,
                value: "ten".to_string()
            }
        );
    }

    #[test]
    fn test_parse_negative_balance() {
        assert_eq!(
            parse_entries_from_str("username,balance\nalice,-10\n").unwrap_err(),
            TreeError::NegativeBalance(BigInt::from(-10))
        );
    }

    #[test]
    fn test_parse_missing_column() {
        assert!(matches!(
            parse_entries_from_str("username,balance\nalice\n").unwrap_err(),
            TreeError::InvalidParameter(_)
        ));
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "username,balance\nalice,1\nbob,2\n").unwrap();
        let entries = parse_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        assert!(matches!(
            parse_entries("/nonexistent/entries.csv").unwrap_err(),
            TreeError::Io(_)
        ));
    }
}
