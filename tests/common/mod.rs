// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use grandlivre::domain::{Account, Amount, accumulate};
use tempfile::TempDir;

pub const HEADER: &str = "Compte,Libellé,Débit,Crédit,Pièce";

/// A small but complete general-ledger export: title rows, account rows,
/// dated lines, per-account totals and a blank line, as exported by
/// accounting software.
///
/// 10 accounts, grand totals 21 542,39 on both sides, 7 balanced records.
pub const SAMPLE: &str = r#"Compte,Libellé,Débit,Crédit,Pièce
Grand livre général,,,,
Période du 01/01/2024 au 31/03/2024
401100PRO,PROMETHEE SYNDIC,,,
05/01/2024,Honoraires janvier,,"1 250,00",FAC-001
05/02/2024,Règlement honoraires,"1 250,00",,REG-001
Total compte 401100PRO,,"1 250,00","1 250,00",
4011GEM,GEM ASCENSEURS,,,
10/01/2024,Contrat entretien ascenseur,,"842,16",FAC-002
12/02/2024,Règlement GEM,"842,16",,REG-002
Total compte 4011GEM,,"842,16","842,16",
45000001,COPROPRIETAIRE DUPONT,,,
20/03/2024,Appel de fonds T1,,"10 000,00",AF-T1
Total compte 45000001,,,"10 000,00",
45000002,COPROPRIETAIRE MARTIN,,,
20/03/2024,Appel de fonds T1,,"2 345,67",AF-T1
Total compte 45000002,,,"2 345,67",
471000,COMPTE D'ATTENTE,,,
31/03/2024,Régularisation,,,

50212200,PLACEMENT FONDS TRAVAUX,,,
15/03/2024,Virement Fonds Travaux,"5 000,00",,VIR-001
Total compte 50212200,,"5 000,00",,
512C0403,BANQUE POPULAIRE,,,
05/02/2024,Règlement honoraires,,"1 250,00",REG-001
12/02/2024,Règlement GEM,,"842,16",REG-002
15/03/2024,Virement Fonds Travaux,,"5 000,00",VIR-001
20/03/2024,Appel de fonds T1,"12 345,67",,AF-T1
31/03/2024,Frais bancaires,,"12,40"
Total compte 512C0403,,"12 345,67","7 104,56",
614000,CONTRAT ENTRETIEN,,,
10/01/2024,Contrat entretien ascenseur,"842,16",,FAC-002
621100,HONORAIRES SYNDIC,,,
05/01/2024,Honoraires janvier,"1 250,00",,FAC-001
623500,FRAIS BANCAIRES,,,
31/03/2024,Frais bancaires mars,"12,40",,
Total général,,"21 542,39","21 542,39",
"#;

/// Builds ledger exports row by row.
#[derive(Debug, Clone)]
pub struct LedgerBuilder {
    lines: Vec<String>,
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self {
            lines: vec![HEADER.to_string()],
        }
    }

    pub fn account(mut self, code: &str, label: &str) -> Self {
        self.lines.push(format!("{},{},,,", code, label));
        self
    }

    pub fn line(mut self, date: &str, label: &str, debit: &str, credit: &str) -> Self {
        self.lines
            .push(format!("{},{},\"{}\",\"{}\",", date, label, debit, credit));
        self
    }

    pub fn raw(mut self, row: &str) -> Self {
        self.lines.push(row.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}

/// Write `content` into a temporary `grand-livre.csv`
pub fn write_fixture(content: &str) -> Result<(PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("grand-livre.csv");
    fs::write(&path, content)?;
    Ok((path, temp_dir))
}

/// Per-line rounded fold of an account's debits and credits
pub fn folded_totals(account: &Account) -> (Amount, Amount) {
    account
        .record_items
        .iter()
        .fold((0.0, 0.0), |(debit, credit), item| {
            (accumulate(debit, item.debit), accumulate(credit, item.credit))
        })
}
