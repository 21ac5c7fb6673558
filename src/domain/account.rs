use std::sync::Arc;

use serde::Serialize;

use super::{Amount, RecordItem, accumulate};

/// Debit and credit totals, re-rounded to cents after every addition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub total_debit: Amount,
    pub total_credit: Amount,
}

impl Balance {
    pub fn add(&mut self, debit: Amount, credit: Amount) {
        self.total_debit = accumulate(self.total_debit, debit);
        self.total_credit = accumulate(self.total_credit, credit);
    }

    /// Double-entry check: debits equal credits.
    pub fn is_balanced(&self) -> bool {
        self.total_debit == self.total_credit
    }
}

/// A ledger account opened by a recognised code in the account column.
/// Accumulates the dated lines that follow it until another code shows up.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub code: String,
    pub label: String,
    pub total_debit: Amount,
    pub total_credit: Amount,
    pub record_items: Vec<Arc<RecordItem>>,
}

impl Account {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
            total_debit: 0.0,
            total_credit: 0.0,
            record_items: Vec::new(),
        }
    }

    /// Append a line and fold its amounts into the running totals.
    pub fn push_item(&mut self, item: Arc<RecordItem>) {
        self.total_debit = accumulate(self.total_debit, item.debit);
        self.total_credit = accumulate(self.total_credit, item.credit);
        self.record_items.push(item);
    }

    pub fn totals(&self) -> Balance {
        Balance {
            total_debit: self.total_debit,
            total_credit: self.total_credit,
        }
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            code: self.code.clone(),
            label: self.label.clone(),
            total_debit: self.total_debit,
            total_credit: self.total_credit,
        }
    }

    /// Recompute the totals from the items with per-step rounding.
    /// Always equal to the stored totals for accounts built with [`Account::push_item`].
    pub fn recomputed_totals(&self) -> Balance {
        let mut totals = Balance::default();
        for item in &self.record_items {
            totals.add(item.debit, item.credit);
        }
        totals
    }
}

/// An account without its lines, as attached to grouped record items.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub code: String,
    pub label: String,
    pub total_debit: Amount,
    pub total_credit: Amount,
}

impl AccountSummary {
    /// Placeholder for lines read before any account was opened.
    pub fn none() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn item(debit: Amount, credit: Amount) -> Arc<RecordItem> {
        Arc::new(RecordItem {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            label: "Line".into(),
            debit,
            credit,
            invoice_number: None,
            account: Some(0),
        })
    }

    #[test]
    fn test_push_item_updates_totals() {
        let mut account = Account::new("512C0403", "Banque");
        account.push_item(item(100.5, 0.0));
        account.push_item(item(0.0, 20.25));
        account.push_item(item(0.1, 0.2));

        assert_eq!(account.record_items.len(), 3);
        assert_eq!(account.total_debit, 100.6);
        assert_eq!(account.total_credit, 20.45);
        assert_eq!(account.totals(), account.recomputed_totals());
    }

    #[test]
    fn test_totals_round_after_each_item() {
        let mut account = Account::new("606000", "Achats");
        for _ in 0..3 {
            account.push_item(item(0.004, 0.0));
        }
        assert_eq!(account.total_debit, 0.0);
    }

    #[test]
    fn test_balance_is_balanced() {
        let mut balance = Balance::default();
        assert!(balance.is_balanced());

        balance.add(10.0, 0.0);
        assert!(!balance.is_balanced());

        balance.add(0.0, 10.0);
        assert!(balance.is_balanced());
    }

    #[test]
    fn test_summary_none_is_empty() {
        let none = AccountSummary::none();
        assert_eq!(none.code, "");
        assert_eq!(none.label, "");
        assert_eq!(none.total_debit, 0.0);
        assert_eq!(none.total_credit, 0.0);
    }
}
