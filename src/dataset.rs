//! Parsing of whitespace-separated transaction files.
//!
//! One transaction per line, item identifiers separated by whitespace. A
//! blank line becomes an empty transaction and stays in the collection, so
//! it keeps counting towards the support denominator.

use crate::Transaction;
use std::io::BufRead;

/// Errors raised while reading a transaction file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("line {line}: invalid item identifier `{token}`")]
    InvalidItem { line: usize, token: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a transaction collection from `reader`, one transaction per line.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<Transaction>, DatasetError> {
    let mut result = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut transaction = Transaction::new();
        for token in line.split_whitespace() {
            let item = token.parse().map_err(|_| DatasetError::InvalidItem {
                line: index + 1,
                token: token.to_string(),
            })?;
            transaction.insert(item);
        }
        result.push(transaction);
    }
    Ok(result)
}
