//! The fixed seasonal fee schedule
//!
//! The dashboard's outstanding-balance report charges every room the same
//! two-tier schedule: 3000 for each of the eight academic months
//! (September-April) and 1000 for each of the four holiday months
//! (May-August). This is deliberately independent of the per-tenant fees
//! configured on the room record, which are only consulted when quoting a
//! payment amount (see `services::payment`).

use super::month::Month;

/// Fee charged for each academic month (September-April), in whole shillings
pub const ACADEMIC_FEE: i64 = 3000;

/// Fee charged for each holiday month (May-August), in whole shillings
pub const HOLIDAY_FEE: i64 = 1000;

/// Expected fee for a month under the fixed schedule
pub fn scheduled_fee(month: Month) -> i64 {
    if month.is_academic() {
        ACADEMIC_FEE
    } else {
        HOLIDAY_FEE
    }
}

/// Total expected over a full 12-month cycle (8 x 3000 + 4 x 1000 = 28000)
pub fn annual_total() -> i64 {
    Month::cycle().iter().map(|m| scheduled_fee(*m)).sum()
}
