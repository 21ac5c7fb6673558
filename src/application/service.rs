use std::fs;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::domain::ParsingResult;
use crate::io::import::{ImportOptions, read_rows, strip_byte_order_mark};

use super::{LedgerError, aggregate};

/// Reads ledger exports and aggregates them.
/// This is the primary interface for any client (CLI, tests, other tools).
#[derive(Debug, Clone, Default)]
pub struct LedgerParser {
    options: ImportOptions,
}

impl LedgerParser {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Load the whole file and aggregate it.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParsingResult, LedgerError> {
        let path = path.as_ref();
        info!("Reading ledger export {}", path.display());
        let content = fs::read_to_string(path).map_err(|source| LedgerError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&content)
    }

    /// Load everything from `reader` before aggregating.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<ParsingResult, LedgerError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse_str(&content)
    }

    pub fn parse_str(&self, content: &str) -> Result<ParsingResult, LedgerError> {
        let content = strip_byte_order_mark(content);
        let rows = read_rows(content.as_bytes(), &self.options)?;
        Ok(aggregate(&rows, &self.options.columns))
    }
}

/// Parse a ledger export with the default column names and delimiter.
pub fn parse(path: impl AsRef<Path>) -> Result<ParsingResult, LedgerError> {
    LedgerParser::default().parse_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER: &str = "\u{FEFF}Compte,Libellé,Débit,Crédit,Pièce
512C0403,Banque,,,
02/01/2024,Cotisation,\"1 500,00\",,
606000,Achats,,,
02/01/2024,Cotisation,,\"1 500,00\",
";

    #[test]
    fn test_parse_str_strips_byte_order_mark() {
        let result = LedgerParser::default().parse_str(LEDGER).unwrap();
        assert_eq!(result.accounts.len(), 2);
        assert_eq!(result.balance.total_debit, 1500.0);
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let parser = LedgerParser::default();
        let from_reader = parser.parse_reader(LEDGER.as_bytes()).unwrap();
        assert_eq!(from_reader, parser.parse_str(LEDGER).unwrap());
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let input: &[u8] = b"Compte,Libell\xe9\n";
        let err = LedgerParser::default().parse_reader(input).unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
        assert!(err.to_string().starts_with("Failed to parse CSV file:"));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse("/definitely/not/here/grand-livre.csv").unwrap_err();
        assert!(matches!(err, LedgerError::Read { .. }));
        assert!(err.to_string().starts_with("Failed to parse CSV file:"));
    }
}
