//! Payment service
//!
//! Records payments with the duplicate-entry check, quotes the amount to
//! pre-fill from the tenant's configured fees, and serves the per-tenant
//! payment listing with its search filter.
//!
//! Note the two distinct fee paths: quoting here uses the tenant's own
//! monthly/holiday fees, while the dashboard balance report uses the fixed
//! schedule in `models::schedule`. Both are kept as-is.

use log::info;

use crate::error::{HostelError, HostelResult};
use crate::models::{Month, Payment, PaymentEntry};
use crate::storage::Storage;

/// Service for payment recording and listing
pub struct PaymentService<'a> {
    storage: &'a Storage,
}

impl<'a> PaymentService<'a> {
    /// Create a new payment service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a payment
    ///
    /// Rejects the insert when a payment already exists for the exact
    /// (room, month, year) triple. The amount is taken as given and never
    /// validated against the fee schedule.
    pub fn record(
        &self,
        room_no: &str,
        month: Month,
        year: i32,
        amount: i64,
    ) -> HostelResult<Payment> {
        let room_no = room_no.trim();
        if room_no.is_empty() {
            return Err(HostelError::Validation("Room number cannot be empty".into()));
        }
        if amount < 0 {
            return Err(HostelError::Validation("Amount cannot be negative".into()));
        }

        self.storage
            .tenants
            .get(room_no)?
            .ok_or_else(|| HostelError::tenant_not_found(room_no))?;

        let payment = Payment::new(room_no, month, year, amount);
        if self.storage.payments.exists(room_no, month, year)? {
            return Err(HostelError::duplicate_payment(payment.describe()));
        }

        self.storage.payments.insert(&payment)?;
        info!("Recorded payment: {} -> {}", payment.describe(), amount);
        Ok(payment)
    }

    /// The amount to pre-fill for a payment, from the tenant's individually
    /// configured fees: the monthly fee for academic months, the holiday fee
    /// for May-August
    pub fn quote_fee(&self, room_no: &str, month: Month) -> HostelResult<i64> {
        let tenant = self
            .storage
            .tenants
            .get(room_no)?
            .ok_or_else(|| HostelError::tenant_not_found(room_no))?;
        Ok(tenant.fee_for(month))
    }

    /// All payments for one tenant, joined with the tenant's name
    pub fn list_for_tenant(&self, room_no: &str) -> HostelResult<Vec<PaymentEntry>> {
        self.storage
            .tenants
            .get(room_no)?
            .ok_or_else(|| HostelError::tenant_not_found(room_no))?;
        self.storage.payments.list_for_tenant(room_no)
    }

    /// Payments for one tenant narrowed by a search query over month name
    /// and year; a blank query returns everything
    pub fn filter(&self, room_no: &str, query: &str) -> HostelResult<Vec<PaymentEntry>> {
        let query = query.trim();
        let entries = self.list_for_tenant(room_no)?;
        if query.is_empty() {
            return Ok(entries);
        }
        Ok(entries.into_iter().filter(|e| e.matches(query)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HostelPaths;
    use crate::services::TenantService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = HostelPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.init_schema().unwrap();
        (temp_dir, storage)
    }

    fn add_tenant(storage: &Storage, room_no: &str, monthly: i64, holiday: i64) {
        TenantService::new(storage)
            .create(room_no, "Alice Wanjiku", "0712345678", monthly, holiday)
            .unwrap();
    }

    #[test]
    fn test_record_payment() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PaymentService::new(&storage);
        add_tenant(&storage, "B12", 3000, 1000);

        let payment = service.record("B12", Month::September, 2025, 3000).unwrap();
        assert_eq!(payment.amount, 3000);
        assert_eq!(
            storage
                .payments
                .count_for("B12", Month::September, 2025)
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_duplicate_payment_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PaymentService::new(&storage);
        add_tenant(&storage, "B12", 3000, 1000);

        service.record("B12", Month::September, 2025, 3000).unwrap();
        let err = service
            .record("B12", Month::September, 2025, 500)
            .unwrap_err();
        assert!(err.is_duplicate());

        // The row count for the triple stays 1
        assert_eq!(
            storage
                .payments
                .count_for("B12", Month::September, 2025)
                .unwrap(),
            1
        );
    }

    #[test]
    fn test_same_month_different_year_is_allowed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PaymentService::new(&storage);
        add_tenant(&storage, "B12", 3000, 1000);

        service.record("B12", Month::September, 2024, 3000).unwrap();
        service.record("B12", Month::September, 2025, 3000).unwrap();
    }

    #[test]
    fn test_record_for_unknown_room() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PaymentService::new(&storage);

        let err = service
            .record("ZZ9", Month::September, 2025, 3000)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_arbitrary_amounts_are_accepted() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PaymentService::new(&storage);
        add_tenant(&storage, "B12", 3000, 1000);

        // Not validated against the schedule
        service.record("B12", Month::September, 2025, 12345).unwrap();
        let err = service.record("B12", Month::October, 2025, -5).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_quote_uses_tenant_fees() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PaymentService::new(&storage);
        add_tenant(&storage, "B12", 3500, 1200);

        assert_eq!(service.quote_fee("B12", Month::September).unwrap(), 3500);
        assert_eq!(service.quote_fee("B12", Month::June).unwrap(), 1200);
        assert!(service.quote_fee("ZZ9", Month::June).unwrap_err().is_not_found());
    }

    #[test]
    fn test_filter_payments() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PaymentService::new(&storage);
        add_tenant(&storage, "B12", 3000, 1000);

        service.record("B12", Month::September, 2025, 3000).unwrap();
        service.record("B12", Month::October, 2025, 3000).unwrap();
        service.record("B12", Month::September, 2024, 3000).unwrap();

        assert_eq!(service.filter("B12", "").unwrap().len(), 3);
        assert_eq!(service.filter("B12", "sept").unwrap().len(), 2);
        assert_eq!(service.filter("B12", "2024").unwrap().len(), 1);
        assert!(service.filter("B12", "march").unwrap().is_empty());
    }
}
