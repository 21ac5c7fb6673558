use anyhow::Result;
use std::io::Write;

use crate::application::ParsingReport;
use crate::domain::{ParsingResult, format_amount};

/// Write the full report as pretty JSON.
pub fn write_json<W: Write>(mut writer: W, result: &ParsingResult) -> Result<()> {
    let json = serde_json::to_string_pretty(&ParsingReport::new(result))?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Export account totals to CSV format
pub fn write_accounts_csv<W: Write>(writer: W, result: &ParsingResult) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Write header
    csv_writer.write_record(["code", "label", "total_debit", "total_credit", "items"])?;

    let mut count = 0;
    for account in &result.accounts {
        csv_writer.write_record([
            account.code.clone(),
            account.label.clone(),
            format_amount(account.total_debit),
            format_amount(account.total_credit),
            account.record_items.len().to_string(),
        ])?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

/// Export grouped records to CSV format, one line per record item
pub fn write_records_csv<W: Write>(writer: W, result: &ParsingResult) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Write header
    csv_writer.write_record([
        "record", "date", "label", "account", "debit", "credit", "invoice",
    ])?;

    let mut count = 0;
    for (index, record) in result.records.iter().enumerate() {
        for item in &record.record_items {
            let account = result.account_of(item);
            csv_writer.write_record([
                (index + 1).to_string(),
                item.date.format("%d/%m/%Y").to_string(),
                item.label.clone(),
                account.code,
                format_amount(item.debit),
                format_amount(item.credit),
                item.invoice_number.clone().unwrap_or_default(),
            ])?;
            count += 1;
        }
    }

    csv_writer.flush()?;
    Ok(count)
}
