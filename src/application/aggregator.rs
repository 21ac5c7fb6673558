use std::sync::Arc;

use log::{debug, info, trace};

use crate::domain::{
    Account, Balance, ParsingResult, RecordGroups, RecordItem, is_known_account_code,
    is_ledger_date, parse_amount, parse_date,
};
use crate::io::import::{Columns, Row};

/// Single pass over the rows of a ledger export.
///
/// Rows whose account column holds a known code open an account; rows whose
/// account column holds a `DD/MM/YYYY` date are lines booked on the open
/// account. The same column drives both, as in the exports this reads.
pub struct LedgerAggregator<'a> {
    columns: &'a Columns,
    accounts: Vec<Account>,
    current: Option<Account>,
    balance: Balance,
    groups: RecordGroups,
}

impl<'a> LedgerAggregator<'a> {
    pub fn new(columns: &'a Columns) -> Self {
        Self {
            columns,
            accounts: Vec::new(),
            current: None,
            balance: Balance::default(),
            groups: RecordGroups::new(),
        }
    }

    pub fn push(&mut self, row: &Row) {
        let value = row.get(&self.columns.account);

        if self.opens_account(value) {
            self.open_account(value, row.get(&self.columns.label));
        }

        if is_ledger_date(value) {
            self.push_line(value, row);
        } else if !value.is_empty() && !is_known_account_code(value) {
            trace!("Ignoring row with account column {:?}", value);
        }
    }

    pub fn finish(mut self) -> ParsingResult {
        if let Some(account) = self.current.take() {
            self.accounts.push(account);
        }

        let group_count = self.groups.len();
        let (records, dropped) = self.groups.into_records();
        if dropped > 0 {
            debug!("Dropped {} of {} unbalanced record groups", dropped, group_count);
        }

        let result = ParsingResult {
            accounts: self.accounts,
            balance: self.balance,
            records,
        };
        info!(
            "Parsed {} accounts, {} lines, {} balanced records",
            result.accounts.len(),
            result.line_count(),
            result.records.len()
        );
        result
    }

    fn opens_account(&self, code: &str) -> bool {
        !code.is_empty()
            && is_known_account_code(code)
            && self
                .current
                .as_ref()
                .is_none_or(|current| current.code != code)
    }

    fn open_account(&mut self, code: &str, label: &str) {
        if let Some(previous) = self.current.take() {
            self.accounts.push(previous);
        }
        debug!("Opening account {} ({})", code, label);
        self.current = Some(Account::new(code, label));
    }

    fn push_line(&mut self, raw_date: &str, row: &Row) {
        let Some(date) = parse_date(raw_date) else {
            return;
        };
        let label = row.get(&self.columns.label);
        let debit = parse_amount(row.get(&self.columns.debit));
        let credit = parse_amount(row.get(&self.columns.credit));

        // The open account will land at the end of `accounts` once replaced
        let item = Arc::new(RecordItem {
            date,
            label: label.to_string(),
            debit,
            credit,
            invoice_number: row.get_opt(&self.columns.invoice).map(str::to_string),
            account: self.current.as_ref().map(|_| self.accounts.len()),
        });

        if let Some(account) = self.current.as_mut() {
            account.push_item(Arc::clone(&item));
        } else {
            trace!("Line {} {:?} read before any account", raw_date, label);
        }
        self.balance.add(debit, credit);
        self.groups.insert(raw_date, label, item);
    }
}

/// Aggregate rows into accounts, grand balance and balanced records.
pub fn aggregate<'r>(rows: impl IntoIterator<Item = &'r Row>, columns: &Columns) -> ParsingResult {
    let mut aggregator = LedgerAggregator::new(columns);
    for row in rows {
        aggregator.push(row);
    }
    aggregator.finish()
}
