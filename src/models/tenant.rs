//! Tenant (room) model
//!
//! A tenant is identified by its room number. Renaming the occupant never
//! changes the key; payments reference the room number directly.

use serde::{Deserialize, Serialize};

use super::month::Month;
use crate::error::{HostelError, HostelResult};

/// A rented room and its occupant's fee configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Room number, the tenant's identity
    pub room_no: String,
    /// Occupant name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Fee charged to this tenant for academic months, in whole shillings
    pub monthly_fee: i64,
    /// Fee charged to this tenant for holiday months, in whole shillings
    pub holiday_fee: i64,
}

impl Tenant {
    /// Create a new tenant record
    pub fn new(
        room_no: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        monthly_fee: i64,
        holiday_fee: i64,
    ) -> Self {
        Self {
            room_no: room_no.into(),
            name: name.into(),
            phone: phone.into(),
            monthly_fee,
            holiday_fee,
        }
    }

    /// Validate the record before it reaches the database
    pub fn validate(&self) -> HostelResult<()> {
        if self.room_no.trim().is_empty() {
            return Err(HostelError::Validation("Room number cannot be empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(HostelError::Validation("Tenant name cannot be empty".into()));
        }
        if self.phone.trim().is_empty() {
            return Err(HostelError::Validation("Phone number cannot be empty".into()));
        }
        if self.monthly_fee < 0 || self.holiday_fee < 0 {
            return Err(HostelError::Validation("Fees cannot be negative".into()));
        }
        Ok(())
    }

    /// This tenant's individually configured fee for a month
    ///
    /// Used to pre-fill the payment amount at recording time. The dashboard
    /// ignores this and uses the fixed schedule instead.
    pub fn fee_for(&self, month: Month) -> i64 {
        if month.is_academic() {
            self.monthly_fee
        } else {
            self.holiday_fee
        }
    }

    /// Case-insensitive match against a search query over room number and name
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.room_no.to_lowercase().contains(&q) || self.name.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tenant {
        Tenant::new("B12", "Alice Wanjiku", "0712345678", 3000, 1000)
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let mut t = sample();
        t.name = "  ".to_string();
        assert!(t.validate().unwrap_err().is_validation());

        let mut t = sample();
        t.room_no = "".to_string();
        assert!(t.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_validate_rejects_negative_fees() {
        let mut t = sample();
        t.holiday_fee = -100;
        assert!(t.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_fee_for_month_type() {
        let t = Tenant::new("B12", "Alice", "0712", 3500, 1200);
        assert_eq!(t.fee_for(Month::September), 3500);
        assert_eq!(t.fee_for(Month::April), 3500);
        assert_eq!(t.fee_for(Month::May), 1200);
        assert_eq!(t.fee_for(Month::August), 1200);
    }

    #[test]
    fn test_matches_search() {
        let t = sample();
        assert!(t.matches("b1"));
        assert!(t.matches("wanjiku"));
        assert!(t.matches("ALICE"));
        assert!(!t.matches("C04"));
    }
}
