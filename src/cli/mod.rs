use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use crate::application::{LedgerParser, ParsingReport};
use crate::domain::{ParsingResult, build_integrity_report, format_amount};
use crate::io::export::{write_accounts_csv, write_json, write_records_csv};

/// Grandlivre - General ledger rollup
#[derive(Parser)]
#[command(name = "grandlivre")]
#[command(about = "Roll up a general-ledger CSV export into account totals and balanced records")]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List accounts with their totals
    Accounts {
        /// Ledger export (CSV)
        file: PathBuf,

        /// Only accounts whose code starts with this prefix
        #[arg(long)]
        prefix: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show the lines booked on an account
    Show {
        /// Ledger export (CSV)
        file: PathBuf,

        /// Account code (exact match)
        code: String,
    },

    /// Show the grand debit and credit totals
    Balance {
        /// Ledger export (CSV)
        file: PathBuf,
    },

    /// List balanced records grouped by date and label
    Records {
        /// Ledger export (CSV)
        file: PathBuf,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Verify ledger integrity
    Check {
        /// Ledger export (CSV)
        file: PathBuf,
    },

    /// Export the full result as JSON
    Export {
        /// Ledger export (CSV)
        file: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn run(self) -> Result<()> {
        let parser = LedgerParser::default();

        match self.command {
            Commands::Accounts {
                file,
                prefix,
                format,
            } => {
                let result = load(&parser, &file)?;
                run_accounts_command(&result, prefix.as_deref(), &format)?;
            }

            Commands::Show { file, code } => {
                let result = load(&parser, &file)?;
                run_show_command(&result, &code)?;
            }

            Commands::Balance { file } => {
                let result = load(&parser, &file)?;
                println!(
                    "{:<14} {:>14}",
                    "Total debit:",
                    format_amount(result.balance.total_debit)
                );
                println!(
                    "{:<14} {:>14}",
                    "Total credit:",
                    format_amount(result.balance.total_credit)
                );
                println!(
                    "{:<14} {:>14}",
                    "Status:",
                    if result.balance.is_balanced() {
                        "OK"
                    } else {
                        "UNBALANCED!"
                    }
                );
            }

            Commands::Records { file, format } => {
                let result = load(&parser, &file)?;
                run_records_command(&result, &format)?;
            }

            Commands::Check { file } => {
                let result = load(&parser, &file)?;
                run_check_command(&result)?;
            }

            Commands::Export { file, output } => {
                let result = load(&parser, &file)?;
                match output {
                    Some(path) => {
                        let out = File::create(&path)
                            .with_context(|| format!("Cannot create {}", path.display()))?;
                        write_json(BufWriter::new(out), &result)?;
                        println!(
                            "Exported {} accounts and {} records to {}",
                            result.accounts.len(),
                            result.records.len(),
                            path.display()
                        );
                    }
                    None => write_json(io::stdout().lock(), &result)?,
                }
            }
        }

        Ok(())
    }
}

fn load(parser: &LedgerParser, file: &Path) -> Result<ParsingResult> {
    parser
        .parse_file(file)
        .with_context(|| format!("Cannot load ledger {}", file.display()))
}

fn run_accounts_command(result: &ParsingResult, prefix: Option<&str>, format: &str) -> Result<()> {
    let filtered = ParsingResult {
        accounts: result
            .accounts_with_prefix(prefix.unwrap_or(""))
            .cloned()
            .collect(),
        balance: result.balance,
        records: Vec::new(),
    };

    match format {
        "json" => {
            let report = ParsingReport::new(&filtered);
            println!("{}", serde_json::to_string_pretty(&report.accounts)?);
        }
        "csv" => {
            write_accounts_csv(io::stdout().lock(), &filtered)?;
        }
        "table" => {
            if filtered.accounts.is_empty() {
                println!("No accounts found.");
                return Ok(());
            }
            println!(
                "{:<12} {:<30} {:>14} {:>14} {:>6}",
                "CODE", "LABEL", "DEBIT", "CREDIT", "LINES"
            );
            println!("{}", "-".repeat(80));
            for account in &filtered.accounts {
                println!(
                    "{:<12} {:<30} {:>14} {:>14} {:>6}",
                    account.code,
                    truncate(&account.label, 30),
                    format_amount(account.total_debit),
                    format_amount(account.total_credit),
                    account.record_items.len()
                );
            }
            println!("{}", "-".repeat(80));
            println!("{} account(s)", filtered.accounts.len());
        }
        other => anyhow::bail!("Unknown format '{}'. Use table, json or csv", other),
    }
    Ok(())
}

fn run_show_command(result: &ParsingResult, code: &str) -> Result<()> {
    let accounts: Vec<_> = result.accounts_with_code(code).collect();
    if accounts.is_empty() {
        anyhow::bail!("Account not found: {}", code);
    }

    for account in accounts {
        println!("Account: {} {}", account.code, account.label);
        println!(
            "{:<12} {:<36} {:>14} {:>14} {:<12}",
            "DATE", "LABEL", "DEBIT", "CREDIT", "INVOICE"
        );
        println!("{}", "-".repeat(92));
        for item in &account.record_items {
            println!(
                "{:<12} {:<36} {:>14} {:>14} {:<12}",
                item.date.format("%d/%m/%Y"),
                truncate(&item.label, 36),
                format_amount(item.debit),
                format_amount(item.credit),
                item.invoice_number.as_deref().unwrap_or("")
            );
        }
        println!("{}", "-".repeat(92));
        println!(
            "{:<12} {:<36} {:>14} {:>14}",
            "TOTAL",
            "",
            format_amount(account.total_debit),
            format_amount(account.total_credit)
        );
        println!();
    }
    Ok(())
}

fn run_records_command(result: &ParsingResult, format: &str) -> Result<()> {
    match format {
        "json" => {
            let report = ParsingReport::new(result);
            println!("{}", serde_json::to_string_pretty(&report.records)?);
        }
        "csv" => {
            write_records_csv(io::stdout().lock(), result)?;
        }
        "table" => {
            if result.records.is_empty() {
                println!("No balanced records found.");
                return Ok(());
            }
            for (index, record) in result.records.iter().enumerate() {
                println!(
                    "Record #{}  debit {}  credit {}",
                    index + 1,
                    format_amount(record.total_debit),
                    format_amount(record.total_credit)
                );
                for item in &record.record_items {
                    let account = result.account_of(item);
                    println!(
                        "  {:<12} {:<12} {:<36} {:>14} {:>14}",
                        item.date.format("%d/%m/%Y"),
                        account.code,
                        truncate(&item.label, 36),
                        format_amount(item.debit),
                        format_amount(item.credit)
                    );
                }
            }
            println!();
            println!("{} record(s)", result.records.len());
        }
        other => anyhow::bail!("Unknown format '{}'. Use table, json or csv", other),
    }
    Ok(())
}

fn run_check_command(result: &ParsingResult) -> Result<()> {
    println!("Checking ledger integrity...\n");

    let report = build_integrity_report(result);

    println!("Accounts: {}", report.account_count);
    println!("Lines:    {}", report.line_count);
    println!("Records:  {}", report.record_count);
    println!();
    println!("  {:<12} {:>14}", "Debit:", format_amount(report.balance.total_debit));
    println!("  {:<12} {:>14}", "Credit:", format_amount(report.balance.total_credit));
    println!("  {}", "-".repeat(27));
    println!(
        "  {:<12} {:>14}",
        "Status:",
        if report.is_balanced { "OK" } else { "UNBALANCED!" }
    );
    println!();

    if report.is_healthy() {
        println!("Ledger is consistent.");
    } else {
        if !report.issues.is_empty() {
            println!("Issues found:");
            for issue in &report.issues {
                println!("  - {}", issue);
            }
        }
        anyhow::bail!("Ledger integrity check failed");
    }

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
