//! Dashboard service: the outstanding-balance calculator
//!
//! For every room, starts from the fixed seasonal fee schedule, subtracts
//! the payments recorded for the report year month by month (flooring each
//! month at zero), and reports the unpaid months and balance due. Global
//! totals accumulate in the same pass.
//!
//! The per-tenant monthly/holiday fees configured on the room are ignored
//! here; only the fixed schedule drives the expected amounts.

use chrono::Datelike;

use crate::error::HostelResult;
use crate::models::{scheduled_fee, Month};
use crate::storage::Storage;

/// One unpaid tenant in the dashboard report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpaidRecord {
    /// Room number
    pub room_no: String,
    /// Occupant name
    pub name: String,
    /// Unpaid month names, comma-joined in billing-cycle order
    pub unpaid_months: String,
    /// Sum of unpaid remainders across all 12 months, in whole shillings
    pub balance_due: i64,
}

/// The full dashboard report for one year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardReport {
    /// Year the report covers
    pub year: i32,
    /// Number of rooms on the books
    pub total_tenants: usize,
    /// Sum of all payments recorded for the year
    pub total_collected: i64,
    /// Sum of every tenant's balance due
    pub total_outstanding: i64,
    /// Tenants with at least one unpaid month
    pub unpaid: Vec<UnpaidRecord>,
}

/// Service for the dashboard aggregation
pub struct DashboardService<'a> {
    storage: &'a Storage,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The current calendar year, the default report year
    pub fn current_year() -> i32 {
        chrono::Local::now().year()
    }

    /// Compute the dashboard report for a year
    pub fn report(&self, year: i32) -> HostelResult<DashboardReport> {
        let tenants = self.storage.tenants.list()?;

        let mut total_collected = 0i64;
        let mut total_outstanding = 0i64;
        let mut unpaid = Vec::new();

        for tenant in &tenants {
            // Expected amount remaining per month, seeded from the schedule
            let mut remaining = [0i64; 12];
            for month in Month::cycle() {
                remaining[month.cycle_position()] = scheduled_fee(month);
            }

            for (month, amount) in self.storage.payments.for_room_in_year(&tenant.room_no, year)? {
                let slot = &mut remaining[month.cycle_position()];
                // Overpayment clamps the month at zero; no credit carries over
                *slot = (*slot - amount).max(0);
                total_collected += amount;
            }

            let unpaid_months: Vec<&str> = Month::cycle()
                .iter()
                .filter(|m| remaining[m.cycle_position()] > 0)
                .map(|m| m.name())
                .collect();
            let balance_due: i64 = remaining.iter().sum();
            total_outstanding += balance_due;

            if !unpaid_months.is_empty() {
                unpaid.push(UnpaidRecord {
                    room_no: tenant.room_no.clone(),
                    name: tenant.name.clone(),
                    unpaid_months: unpaid_months.join(", "),
                    balance_due,
                });
            }
        }

        Ok(DashboardReport {
            year,
            total_tenants: tenants.len(),
            total_collected,
            total_outstanding,
            unpaid,
        })
    }
}
