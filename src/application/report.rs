use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Account, AccountSummary, Amount, Balance, ParsingResult, Record, RecordItem};

/// Serializable view of a [`ParsingResult`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsingReport<'a> {
    pub accounts: Vec<AccountReport<'a>>,
    pub balance: Balance,
    pub records: Vec<RecordReport<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountReport<'a> {
    pub code: &'a str,
    pub label: &'a str,
    pub total_debit: Amount,
    pub total_credit: Amount,
    pub record_items: Vec<RecordItemReport<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordItemReport<'a> {
    pub label: &'a str,
    pub debit: Amount,
    pub credit: Amount,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordReport<'a> {
    pub total_debit: Amount,
    pub total_credit: Amount,
    pub record_items: Vec<RecordLineReport<'a>>,
}

/// A record line with the account it was booked on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordLineReport<'a> {
    #[serde(flatten)]
    pub item: RecordItemReport<'a>,
    pub account: AccountSummary,
}

impl<'a> ParsingReport<'a> {
    pub fn new(result: &'a ParsingResult) -> Self {
        Self {
            accounts: result.accounts.iter().map(AccountReport::new).collect(),
            balance: result.balance,
            records: result
                .records
                .iter()
                .map(|record| RecordReport::new(record, result))
                .collect(),
        }
    }
}

impl<'a> AccountReport<'a> {
    fn new(account: &'a Account) -> Self {
        Self {
            code: &account.code,
            label: &account.label,
            total_debit: account.total_debit,
            total_credit: account.total_credit,
            record_items: account
                .record_items
                .iter()
                .map(|item| RecordItemReport::new(item))
                .collect(),
        }
    }
}

impl<'a> RecordItemReport<'a> {
    fn new(item: &'a RecordItem) -> Self {
        Self {
            label: &item.label,
            debit: item.debit,
            credit: item.credit,
            date: item.date,
            invoice_number: item.invoice_number.as_deref(),
        }
    }
}

impl<'a> RecordReport<'a> {
    fn new(record: &'a Record, result: &'a ParsingResult) -> Self {
        Self {
            total_debit: record.total_debit,
            total_credit: record.total_credit,
            record_items: record
                .record_items
                .iter()
                .map(|item| RecordLineReport {
                    item: RecordItemReport::new(item),
                    account: result.account_of(item),
                })
                .collect(),
        }
    }
}
