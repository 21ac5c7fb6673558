use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use chrono::NaiveDate;

use super::{Amount, round2};

/// Position of an account in [`super::ParsingResult::accounts`].
pub type AccountIndex = usize;

/// One dated ledger line. Immutable once read; shared between its account
/// and its record group.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordItem {
    pub date: NaiveDate,
    pub label: String,
    pub debit: Amount,
    pub credit: Amount,
    /// Content of the `Pièce` column, `None` when the row has no such field
    pub invoice_number: Option<String>,
    /// Account that was open when the line was read, `None` before the first account
    pub account: Option<AccountIndex>,
}

/// Lines sharing a date and a label whose debits and credits cancel out.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub total_debit: Amount,
    pub total_credit: Amount,
    pub record_items: Vec<Arc<RecordItem>>,
}

impl Record {
    /// Build a record when the summed debits equal the summed credits at cent precision.
    /// Sums are rounded once at the end, not per line.
    pub fn balanced(record_items: Vec<Arc<RecordItem>>) -> Option<Self> {
        let total_debit = round2(record_items.iter().map(|item| item.debit).sum());
        let total_credit = round2(record_items.iter().map(|item| item.credit).sum());

        (total_debit == total_credit).then_some(Self {
            total_debit,
            total_credit,
            record_items,
        })
    }
}

/// Lines bucketed by raw date string and label, in first-seen order.
#[derive(Debug, Default)]
pub struct RecordGroups {
    positions: HashMap<(String, String), usize>,
    groups: Vec<Vec<Arc<RecordItem>>>,
}

impl RecordGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the bucket keyed by `(raw_date, label)`.
    /// The raw date is used as written in the file, not the parsed date.
    pub fn insert(&mut self, raw_date: &str, label: &str, item: Arc<RecordItem>) {
        match self
            .positions
            .entry((raw_date.to_string(), label.to_string()))
        {
            Entry::Occupied(position) => self.groups[*position.get()].push(item),
            Entry::Vacant(position) => {
                position.insert(self.groups.len());
                self.groups.push(vec![item]);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Keep the balanced groups as records, in first-seen order.
    /// Returns the records and the number of unbalanced groups left out.
    pub fn into_records(self) -> (Vec<Record>, usize) {
        let total = self.groups.len();
        let records: Vec<Record> = self
            .groups
            .into_iter()
            .filter_map(Record::balanced)
            .collect();
        let dropped = total - records.len();
        (records, dropped)
    }
}
