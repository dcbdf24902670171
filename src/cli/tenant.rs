//! Tenant CLI commands
//!
//! Tenant management is restricted to the Admin role; the handler rejects
//! any other session before touching the database.

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::{HostelPaths, Settings};
use crate::display::format_tenant_list;
use crate::error::{HostelError, HostelResult};
use crate::export::export_tenants_csv;
use crate::services::{Session, TenantService};
use crate::storage::Storage;

/// Tenant subcommands
#[derive(Subcommand)]
pub enum TenantCommands {
    /// Add a new tenant
    Add {
        /// Room number (the tenant's permanent key)
        room_no: String,
        /// Occupant name
        name: String,
        /// Contact phone number
        phone: String,
        /// Fee for academic months (September-April)
        #[arg(short, long)]
        monthly_fee: i64,
        /// Fee for holiday months (May-August)
        #[arg(long)]
        holiday_fee: i64,
    },
    /// Update an existing tenant; omitted fields keep their value
    Update {
        /// Room number
        room_no: String,
        /// New occupant name
        #[arg(short, long)]
        name: Option<String>,
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
        /// New academic-month fee
        #[arg(short, long)]
        monthly_fee: Option<i64>,
        /// New holiday-month fee
        #[arg(long)]
        holiday_fee: Option<i64>,
    },
    /// Remove a tenant
    Remove {
        /// Room number
        room_no: String,
    },
    /// List tenants
    List {
        /// Filter by room number or occupant name
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Export the tenant list to CSV
    Export {
        /// Output file; defaults to tenants.csv in the export directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a tenant command
pub fn handle_tenant_command(
    storage: &Storage,
    paths: &HostelPaths,
    settings: &Settings,
    session: &Session,
    cmd: TenantCommands,
) -> HostelResult<()> {
    if !session.is_admin() {
        return Err(HostelError::Auth(
            "Tenant management requires the Admin role".into(),
        ));
    }

    let service = TenantService::new(storage);

    match cmd {
        TenantCommands::Add {
            room_no,
            name,
            phone,
            monthly_fee,
            holiday_fee,
        } => {
            let tenant = service.create(&room_no, &name, &phone, monthly_fee, holiday_fee)?;
            println!("Added tenant {} in room {}", tenant.name, tenant.room_no);
        }

        TenantCommands::Update {
            room_no,
            name,
            phone,
            monthly_fee,
            holiday_fee,
        } => {
            if name.is_none() && phone.is_none() && monthly_fee.is_none() && holiday_fee.is_none() {
                println!("No changes specified. Use --name, --phone, --monthly-fee or --holiday-fee.");
                return Ok(());
            }
            let tenant = service.update(
                &room_no,
                name.as_deref(),
                phone.as_deref(),
                monthly_fee,
                holiday_fee,
            )?;
            println!("Updated tenant {} in room {}", tenant.name, tenant.room_no);
        }

        TenantCommands::Remove { room_no } => {
            let tenant = service.delete(&room_no)?;
            println!("Removed tenant {} from room {}", tenant.name, tenant.room_no);
        }

        TenantCommands::List { search } => {
            let tenants = match search {
                Some(query) => service.search(&query)?,
                None => service.list()?,
            };
            print!("{}", format_tenant_list(&tenants, &settings.currency_label));
        }

        TenantCommands::Export { output } => {
            let path = output
                .unwrap_or_else(|| settings.resolve_export_dir(paths).join("tenants.csv"));
            let tenants = service.list()?;
            let file = File::create(&path)
                .map_err(|e| HostelError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
            export_tenants_csv(&tenants, file)?;
            println!("Exported {} tenant(s) to {}", tenants.len(), path.display());
        }
    }

    Ok(())
}
