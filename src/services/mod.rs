//! Business logic layer for hostel-ledger

pub mod auth;
pub mod dashboard;
pub mod payment;
pub mod tenant;

pub use auth::{AuthService, Session};
pub use dashboard::{DashboardReport, DashboardService, UnpaidRecord};
pub use payment::PaymentService;
pub use tenant::TenantService;
