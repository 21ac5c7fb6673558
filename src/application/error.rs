use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a ledger export. Parsing never returns a partial result.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Failed to parse CSV file: cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse CSV file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV file: {0}")]
    Csv(#[from] csv::Error),
}
