use super::{Account, AccountSummary, Balance, Record, RecordItem};

/// Everything read from one ledger export.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsingResult {
    /// Accounts in the order they were opened
    pub accounts: Vec<Account>,
    /// Grand totals over every dated line, including lines read before the first account
    pub balance: Balance,
    /// Balanced groups of lines sharing a date and a label
    pub records: Vec<Record>,
}

impl ParsingResult {
    /// Account a line was booked on, with its final totals.
    /// Lines read before the first account resolve to [`AccountSummary::none`].
    pub fn account_of(&self, item: &RecordItem) -> AccountSummary {
        item.account
            .and_then(|index| self.accounts.get(index))
            .map(Account::summary)
            .unwrap_or_else(AccountSummary::none)
    }

    /// Accounts whose code starts with `prefix`, in order.
    pub fn accounts_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a Account> {
        self.accounts
            .iter()
            .filter(move |account| account.code.starts_with(prefix))
    }

    /// Every account entry opened with exactly this code.
    /// A code that reappears after another one has one entry per run.
    pub fn accounts_with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Account> {
        self.accounts
            .iter()
            .filter(move |account| account.code == code)
    }

    /// Number of dated lines attached to an account.
    pub fn line_count(&self) -> usize {
        self.accounts
            .iter()
            .map(|account| account.record_items.len())
            .sum()
    }
}

/// Consistency checks over a [`ParsingResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityReport {
    pub account_count: usize,
    pub line_count: usize,
    pub record_count: usize,
    pub balance: Balance,
    /// Grand debit equals grand credit
    pub is_balanced: bool,
    pub issues: Vec<String>,
}

impl IntegrityReport {
    pub fn is_healthy(&self) -> bool {
        self.is_balanced && self.issues.is_empty()
    }
}

/// Verify per-account totals, record balance and the double-entry balance.
pub fn build_integrity_report(result: &ParsingResult) -> IntegrityReport {
    let mut issues = Vec::new();

    for (index, account) in result.accounts.iter().enumerate() {
        let recomputed = account.recomputed_totals();
        if recomputed != account.totals() {
            issues.push(format!(
                "Account {} (#{}) totals {:.2}/{:.2} differ from its lines {:.2}/{:.2}",
                account.code,
                index,
                account.total_debit,
                account.total_credit,
                recomputed.total_debit,
                recomputed.total_credit
            ));
        }
    }

    for (index, record) in result.records.iter().enumerate() {
        if record.total_debit != record.total_credit {
            issues.push(format!(
                "Record #{} is unbalanced: debit {:.2}, credit {:.2}",
                index, record.total_debit, record.total_credit
            ));
        }
    }

    IntegrityReport {
        account_count: result.accounts.len(),
        line_count: result.line_count(),
        record_count: result.records.len(),
        balance: result.balance,
        is_balanced: result.balance.is_balanced(),
        issues,
    }
}
