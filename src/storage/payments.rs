//! Payment repository

use std::str::FromStr;

use rusqlite::params;

use super::db::Database;
use crate::error::{HostelError, HostelResult};
use crate::models::{Month, Payment, PaymentEntry};

/// Repository for the payments table
pub struct PaymentRepository {
    db: Database,
}

/// Parse a month name read back from the payments table
///
/// The month column is a closed enumeration; anything else in it is a data
/// error, not a defined input.
fn month_from_db(raw: &str) -> HostelResult<Month> {
    Month::from_str(raw).map_err(|_| {
        HostelError::Storage(format!("Unrecognized month '{}' in payments table", raw))
    })
}

impl PaymentRepository {
    /// Create a new payment repository
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Check whether a payment already exists for the exact
    /// (room, month, year) triple
    pub fn exists(&self, room_no: &str, month: Month, year: i32) -> HostelResult<bool> {
        let conn = self.db.connect()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM payments WHERE room_no = ?1 AND month = ?2 AND year = ?3",
            params![room_no, month.name(), year],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Count rows for an exact (room, month, year) triple
    pub fn count_for(&self, room_no: &str, month: Month, year: i32) -> HostelResult<i64> {
        let conn = self.db.connect()?;
        let count = conn.query_row(
            "SELECT COUNT(*) FROM payments WHERE room_no = ?1 AND month = ?2 AND year = ?3",
            params![room_no, month.name(), year],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Insert a new payment row
    pub fn insert(&self, payment: &Payment) -> HostelResult<()> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO payments (room_no, month, year, amount) VALUES (?1, ?2, ?3, ?4)",
            params![
                payment.room_no,
                payment.month.name(),
                payment.year,
                payment.amount
            ],
        )?;
        Ok(())
    }

    /// All payments for one room in one year, as (month, amount) pairs
    ///
    /// The query is year-scoped so payments for other years never reach the
    /// balance calculator.
    pub fn for_room_in_year(&self, room_no: &str, year: i32) -> HostelResult<Vec<(Month, i64)>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT month, amount FROM payments WHERE room_no = ?1 AND year = ?2",
        )?;
        let rows = stmt
            .query_map(params![room_no, year], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(raw, amount)| Ok((month_from_db(&raw)?, amount)))
            .collect()
    }

    /// All payments for one room joined with the tenant's name, ordered by
    /// year then billing-cycle month position
    pub fn list_for_tenant(&self, room_no: &str) -> HostelResult<Vec<PaymentEntry>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT r.name, p.month, p.year, p.amount
             FROM payments p
             JOIN rooms r ON p.room_no = r.room_no
             WHERE p.room_no = ?1",
        )?;
        let rows = stmt
            .query_map(params![room_no], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i32>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut entries = rows
            .into_iter()
            .map(|(tenant_name, raw_month, year, amount)| {
                Ok(PaymentEntry {
                    tenant_name,
                    month: month_from_db(&raw_month)?,
                    year,
                    amount,
                })
            })
            .collect::<HostelResult<Vec<_>>>()?;

        entries.sort_by_key(|e| (e.year, e.month.cycle_position()));
        Ok(entries)
    }
}
