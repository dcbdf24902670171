//! Payment CLI commands

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Subcommand;

use crate::config::{HostelPaths, Settings};
use crate::display::format_payment_list;
use crate::error::{HostelError, HostelResult};
use crate::export::export_payments_csv;
use crate::models::Month;
use crate::services::{DashboardService, PaymentService};
use crate::storage::Storage;

/// Payment subcommands
#[derive(Subcommand)]
pub enum PaymentCommands {
    /// Record a payment for a tenant
    Record {
        /// Room number
        room_no: String,
        /// Billing month (e.g. "September")
        month: String,
        /// Year; defaults to the current calendar year
        #[arg(short, long)]
        year: Option<i32>,
        /// Amount paid; defaults to the tenant's configured fee for the month
        #[arg(short, long)]
        amount: Option<i64>,
    },
    /// Show the fee a tenant would be charged for a month
    Quote {
        /// Room number
        room_no: String,
        /// Billing month (e.g. "May")
        month: String,
    },
    /// List a tenant's payments
    List {
        /// Room number
        room_no: String,
        /// Filter by month name or year
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Export a tenant's (possibly filtered) payments to CSV
    Export {
        /// Room number
        room_no: String,
        /// Filter by month name or year
        #[arg(short, long)]
        search: Option<String>,
        /// Output file; defaults to payments.csv in the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_month(raw: &str) -> HostelResult<Month> {
    Month::from_str(raw).map_err(|e| HostelError::Validation(e.to_string()))
}

/// Handle a payment command
pub fn handle_payment_command(
    storage: &Storage,
    paths: &HostelPaths,
    settings: &Settings,
    cmd: PaymentCommands,
) -> HostelResult<()> {
    let service = PaymentService::new(storage);
    let currency = &settings.currency_label;

    match cmd {
        PaymentCommands::Record {
            room_no,
            month,
            year,
            amount,
        } => {
            let month = parse_month(&month)?;
            let year = year.unwrap_or_else(DashboardService::current_year);
            let amount = match amount {
                Some(amount) => amount,
                None => {
                    let quoted = service.quote_fee(&room_no, month)?;
                    println!("No amount given; using the configured fee of {} {}", currency, quoted);
                    quoted
                }
            };

            let payment = service.record(&room_no, month, year, amount)?;
            println!(
                "Recorded {} {} for {} ({} {})",
                currency, payment.amount, payment.room_no, payment.month, payment.year
            );
        }

        PaymentCommands::Quote { room_no, month } => {
            let month = parse_month(&month)?;
            let fee = service.quote_fee(&room_no, month)?;
            println!("{} owes {} {} for {}", room_no, currency, fee, month);
        }

        PaymentCommands::List { room_no, search } => {
            let entries = match search {
                Some(query) => service.filter(&room_no, &query)?,
                None => service.list_for_tenant(&room_no)?,
            };
            print!("{}", format_payment_list(&entries, currency));
        }

        PaymentCommands::Export {
            room_no,
            search,
            output,
        } => {
            let entries = match search {
                Some(query) => service.filter(&room_no, &query)?,
                None => service.list_for_tenant(&room_no)?,
            };
            let path = output
                .unwrap_or_else(|| settings.resolve_export_dir(paths).join("payments.csv"));
            let file = File::create(&path)
                .map_err(|e| HostelError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
            export_payments_csv(&entries, file)?;
            println!("Exported {} payment(s) to {}", entries.len(), path.display());
        }
    }

    Ok(())
}
