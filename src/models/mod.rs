//! Core data models for hostel-ledger
//!
//! This module contains the data structures that represent the hostel
//! domain: the billing-cycle months, the seasonal fee schedule, tenants,
//! payments, and user accounts.

pub mod month;
pub mod payment;
pub mod schedule;
pub mod tenant;
pub mod user;

pub use month::Month;
pub use payment::{Payment, PaymentEntry};
pub use schedule::{annual_total, scheduled_fee, ACADEMIC_FEE, HOLIDAY_FEE};
pub use tenant::Tenant;
pub use user::{Role, User};
