use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("Unknown output format `{0}`, expected `sql` or `csv`")]
    UnknownFormat(String),
    #[error("Balances must lie between 1 and 1000")]
    BalanceOutOfRange,
    #[error("Malformed account record: {0}")]
    MalformedRecord(String),
}
