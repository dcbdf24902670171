use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hostel_ledger::cli::{
    handle_dashboard_command, handle_payment_command, handle_tenant_command, DashboardCommands,
    PaymentCommands, TenantCommands,
};
use hostel_ledger::config::{HostelPaths, Settings};
use hostel_ledger::services::auth::{AuthService, Session};
use hostel_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "hostel",
    version,
    about = "Hostel tenant, rent and holiday-payment tracker",
    long_about = "hostel-ledger tracks hostel tenants and their monthly rent and \
                  holiday payments against a seasonal fee schedule, and reports \
                  which months are unpaid and what balance remains."
)]
struct Cli {
    /// Username to log in with; prompted for when omitted
    #[arg(short = 'u', long, global = true, env = "HOSTEL_USERNAME")]
    username: Option<String>,

    /// Password to log in with; prompted for when omitted
    #[arg(short = 'p', long, global = true, env = "HOSTEL_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tenant management commands (Admin only)
    #[command(subcommand)]
    Tenant(TenantCommands),

    /// Payment recording and listing commands
    #[command(subcommand, alias = "pay")]
    Payment(PaymentCommands),

    /// Dashboard and unpaid-balance reporting commands
    #[command(subcommand, alias = "dash")]
    Dashboard(DashboardCommands),

    /// Initialize the database and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let paths = HostelPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Commands::Init => {
            println!("Initializing hostel-ledger at: {}", paths.base_dir().display());
            storage.init_schema()?;
            if AuthService::new(&storage).ensure_default_admin()? {
                println!("Created default admin account (admin / admin123).");
                println!("Change its password before real use.");
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
        }

        Commands::Config => {
            println!("hostel-ledger Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Database file:    {}", paths.db_file().display());
            println!("Export directory: {}", settings.resolve_export_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Currency label: {}", settings.currency_label);
            println!("  Report year:    {:?}", settings.report_year);
        }

        Commands::Tenant(cmd) => {
            let session = login(&storage, cli.username, cli.password)?;
            handle_tenant_command(&storage, &paths, &settings, &session, cmd)?;
        }

        Commands::Payment(cmd) => {
            login(&storage, cli.username, cli.password)?;
            handle_payment_command(&storage, &paths, &settings, cmd)?;
        }

        Commands::Dashboard(cmd) => {
            login(&storage, cli.username, cli.password)?;
            handle_dashboard_command(&storage, &paths, &settings, cmd)?;
        }
    }

    Ok(())
}

/// Authenticate before any data command runs
///
/// The users table is ensured (and the default admin seeded) first so login
/// works against a database that was never explicitly initialized.
fn login(storage: &Storage, username: Option<String>, password: Option<String>) -> Result<Session> {
    storage.ensure_users_table()?;
    let auth = AuthService::new(storage);
    if auth.ensure_default_admin()? {
        eprintln!("Created default admin account (admin / admin123).");
    }

    let username = match username {
        Some(username) => username,
        None => prompt_username()?,
    };
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    Ok(auth.login(&username, &password)?)
}

fn prompt_username() -> Result<String> {
    print!("Username: ");
    std::io::stdout().flush()?;
    let mut username = String::new();
    std::io::stdin().read_line(&mut username)?;
    Ok(username.trim().to_string())
}
