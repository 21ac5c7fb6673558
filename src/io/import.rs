use std::collections::HashMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, trace};

/// Header names of the columns read from a ledger export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    /// Holds account codes on account rows and dates on line rows
    pub account: String,
    pub label: String,
    pub debit: String,
    pub credit: String,
    /// Invoice or voucher reference
    pub invoice: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            account: "Compte".to_string(),
            label: "Libellé".to_string(),
            debit: "Débit".to_string(),
            credit: "Crédit".to_string(),
            invoice: "Pièce".to_string(),
        }
    }
}

/// Options for reading a ledger export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub delimiter: u8,
    pub columns: Columns,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            columns: Columns::default(),
        }
    }
}

/// One CSV record keyed by header name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Value of a column, empty when the row has no such field.
    pub fn get(&self, column: &str) -> &str {
        self.get_opt(column).unwrap_or("")
    }

    /// Value of a column, `None` when the row has no such field.
    pub fn get_opt(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        // Short rows lack trailing columns, extra fields have no header and are dropped
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// Read every row of a ledger export into memory.
///
/// The first record names the columns. Records may have fewer or more fields
/// than the header; blank lines are skipped.
pub fn read_rows<R: Read>(reader: R, options: &ImportOptions) -> Result<Vec<Row>, csv::Error> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    debug!("CSV header: {:?}", headers.iter().collect::<Vec<_>>());

    let mut rows = Vec::new();
    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result?;
        if record.len() != headers.len() {
            trace!(
                "Record {} has {} fields, header has {}",
                line_num + 2, // +2 for header and 0-indexing
                record.len(),
                headers.len()
            );
        }
        rows.push(Row::from_record(&headers, &record));
    }

    debug!("Read {} CSV rows", rows.len());
    Ok(rows)
}

/// Drop a leading UTF-8 byte-order mark, as written by spreadsheet exports.
pub fn strip_byte_order_mark(content: &str) -> &str {
    content.strip_prefix('\u{FEFF}').unwrap_or(content)
}
