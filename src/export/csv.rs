//! CSV export functionality
//!
//! Each exporter writes a fixed header row and one record per entity, with
//! the field order spelled out per entity type.

use std::io::Write;

use crate::error::HostelResult;
use crate::models::{PaymentEntry, Tenant};
use crate::services::UnpaidRecord;

/// Export the tenant list to CSV
///
/// Columns: RoomNo, Name, Phone, MonthlyFee, HolidayFee
pub fn export_tenants_csv<W: Write>(tenants: &[Tenant], writer: W) -> HostelResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["RoomNo", "Name", "Phone", "MonthlyFee", "HolidayFee"])?;
    for tenant in tenants {
        wtr.write_record([
            tenant.room_no.as_str(),
            tenant.name.as_str(),
            tenant.phone.as_str(),
            &tenant.monthly_fee.to_string(),
            &tenant.holiday_fee.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export a (possibly filtered) payment listing to CSV
///
/// Columns: Tenant, Month, Year, AmountPaid
pub fn export_payments_csv<W: Write>(entries: &[PaymentEntry], writer: W) -> HostelResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Tenant", "Month", "Year", "AmountPaid"])?;
    for entry in entries {
        wtr.write_record([
            entry.tenant_name.as_str(),
            entry.month.name(),
            &entry.year.to_string(),
            &entry.amount.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Export the unpaid-tenants report to CSV
///
/// Columns: Room No, Name, Unpaid Months, Balance Due. One row per unpaid
/// tenant; months stay comma-joined inside their field.
pub fn export_unpaid_csv<W: Write>(records: &[UnpaidRecord], writer: W) -> HostelResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Room No", "Name", "Unpaid Months", "Balance Due"])?;
    for record in records {
        wtr.write_record([
            record.room_no.as_str(),
            record.name.as_str(),
            record.unpaid_months.as_str(),
            &record.balance_due.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
