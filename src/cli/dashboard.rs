//! Dashboard CLI commands

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{HostelPaths, Settings};
use crate::display::format_dashboard;
use crate::error::{HostelError, HostelResult};
use crate::export::{export_unpaid_csv, export_unpaid_pdf};
use crate::services::DashboardService;
use crate::storage::Storage;

/// Dashboard subcommands
#[derive(Subcommand)]
pub enum DashboardCommands {
    /// Show totals and the unpaid-tenants table
    Show {
        /// Report year; defaults to the current calendar year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Export the unpaid-tenants report to CSV
    ExportCsv {
        /// Report year; defaults to the current calendar year
        #[arg(short, long)]
        year: Option<i32>,
        /// Output file; defaults to unpaid_tenants.csv in the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the unpaid-tenants report to PDF
    ExportPdf {
        /// Report year; defaults to the current calendar year
        #[arg(short, long)]
        year: Option<i32>,
        /// Output file; defaults to unpaid_tenants_report.pdf in the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn resolve_year(settings: &Settings, year: Option<i32>) -> i32 {
    year.or(settings.report_year)
        .unwrap_or_else(DashboardService::current_year)
}

/// Handle a dashboard command
pub fn handle_dashboard_command(
    storage: &Storage,
    paths: &HostelPaths,
    settings: &Settings,
    cmd: DashboardCommands,
) -> HostelResult<()> {
    let service = DashboardService::new(storage);

    match cmd {
        DashboardCommands::Show { year } => {
            let report = service.report(resolve_year(settings, year))?;
            print!("{}", format_dashboard(&report, &settings.currency_label));
        }

        DashboardCommands::ExportCsv { year, output } => {
            let report = service.report(resolve_year(settings, year))?;
            let path = output
                .unwrap_or_else(|| settings.resolve_export_dir(paths).join("unpaid_tenants.csv"));
            let file = File::create(&path)
                .map_err(|e| HostelError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
            export_unpaid_csv(&report.unpaid, file)?;
            println!(
                "Exported {} unpaid tenant(s) to {}",
                report.unpaid.len(),
                path.display()
            );
        }

        DashboardCommands::ExportPdf { year, output } => {
            let report = service.report(resolve_year(settings, year))?;
            let path = output.unwrap_or_else(|| {
                settings
                    .resolve_export_dir(paths)
                    .join("unpaid_tenants_report.pdf")
            });
            let file = File::create(&path)
                .map_err(|e| HostelError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
            export_unpaid_pdf(
                &report.unpaid,
                &format!("Unpaid Tenants Report {}", report.year),
                &settings.currency_label,
                file,
            )?;
            println!(
                "Exported {} unpaid tenant(s) to {}",
                report.unpaid.len(),
                path.display()
            );
        }
    }

    Ok(())
}
