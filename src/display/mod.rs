//! Terminal output formatting
//!
//! Formats tenants, payments, and the dashboard report as plain-text tables.

pub mod dashboard;
pub mod payment;
pub mod tenant;

pub use dashboard::format_dashboard;
pub use payment::format_payment_list;
pub use tenant::format_tenant_list;
