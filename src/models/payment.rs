//! Payment models
//!
//! A payment records the amount a tenant paid toward a specific month of a
//! specific year. At most one payment row may exist per
//! (room number, month, year) triple; the payment service enforces this with
//! an explicit pre-insert existence check rather than a database constraint.

use serde::{Deserialize, Serialize};

use super::month::Month;

/// A payment as stored in the payments table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Room number of the paying tenant (foreign key into rooms)
    pub room_no: String,
    /// Billing month the payment applies to
    pub month: Month,
    /// Calendar year the payment applies to
    pub year: i32,
    /// Amount paid, in whole shillings
    pub amount: i64,
}

impl Payment {
    /// Create a new payment record
    pub fn new(room_no: impl Into<String>, month: Month, year: i32, amount: i64) -> Self {
        Self {
            room_no: room_no.into(),
            month,
            year,
            amount,
        }
    }

    /// Human-readable identifier for error messages
    pub fn describe(&self) -> String {
        format!("room {}, {} {}", self.room_no, self.month, self.year)
    }
}

/// A payment joined with the tenant's name, as rendered in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    /// Occupant name at listing time
    pub tenant_name: String,
    /// Billing month the payment applies to
    pub month: Month,
    /// Calendar year the payment applies to
    pub year: i32,
    /// Amount paid, in whole shillings
    pub amount: i64,
}

impl PaymentEntry {
    /// Case-insensitive match against a search query over month name and year
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.month.name().to_lowercase().contains(&q) || self.year.to_string().contains(&q)
    }
}
