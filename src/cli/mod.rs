//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod dashboard;
pub mod payment;
pub mod tenant;

pub use dashboard::{handle_dashboard_command, DashboardCommands};
pub use payment::{handle_payment_command, PaymentCommands};
pub use tenant::{handle_tenant_command, TenantCommands};
