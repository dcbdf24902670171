//! Tenant repository

use rusqlite::{params, OptionalExtension, Row};

use super::db::Database;
use crate::error::HostelResult;
use crate::models::Tenant;

/// Repository for the rooms table
pub struct TenantRepository {
    db: Database,
}

fn tenant_from_row(row: &Row) -> rusqlite::Result<Tenant> {
    Ok(Tenant {
        room_no: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        monthly_fee: row.get(3)?,
        holiday_fee: row.get(4)?,
    })
}

impl TenantRepository {
    /// Create a new tenant repository
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all tenants ordered by room number
    pub fn list(&self) -> HostelResult<Vec<Tenant>> {
        let conn = self.db.connect()?;
        let mut stmt = conn.prepare(
            "SELECT room_no, name, phone, monthly_fee, holiday_fee
             FROM rooms ORDER BY room_no",
        )?;
        let tenants = stmt
            .query_map([], tenant_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tenants)
    }

    /// Get a tenant by room number
    pub fn get(&self, room_no: &str) -> HostelResult<Option<Tenant>> {
        let conn = self.db.connect()?;
        let tenant = conn
            .query_row(
                "SELECT room_no, name, phone, monthly_fee, holiday_fee
                 FROM rooms WHERE room_no = ?1",
                params![room_no],
                tenant_from_row,
            )
            .optional()?;
        Ok(tenant)
    }

    /// Insert a new tenant
    pub fn insert(&self, tenant: &Tenant) -> HostelResult<()> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO rooms (room_no, name, phone, monthly_fee, holiday_fee)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                tenant.room_no,
                tenant.name,
                tenant.phone,
                tenant.monthly_fee,
                tenant.holiday_fee
            ],
        )?;
        Ok(())
    }

    /// Update an existing tenant's details (the room number is the key and
    /// never changes)
    pub fn update(&self, tenant: &Tenant) -> HostelResult<bool> {
        let conn = self.db.connect()?;
        let changed = conn.execute(
            "UPDATE rooms SET name = ?1, phone = ?2, monthly_fee = ?3, holiday_fee = ?4
             WHERE room_no = ?5",
            params![
                tenant.name,
                tenant.phone,
                tenant.monthly_fee,
                tenant.holiday_fee,
                tenant.room_no
            ],
        )?;
        Ok(changed > 0)
    }

    /// Delete a tenant by room number
    ///
    /// No cascade is defined; with foreign keys enabled the database rejects
    /// the delete while payment rows still reference the room.
    pub fn delete(&self, room_no: &str) -> HostelResult<bool> {
        let conn = self.db.connect()?;
        let changed = conn.execute("DELETE FROM rooms WHERE room_no = ?1", params![room_no])?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TenantRepository) {
        let temp_dir = TempDir::new().unwrap();
        let db = Database::new(temp_dir.path().join("payments.db"));
        db.init_schema().unwrap();
        (temp_dir, TenantRepository::new(db))
    }

    fn sample(room_no: &str) -> Tenant {
        Tenant::new(room_no, "Alice Wanjiku", "0712345678", 3000, 1000)
    }

    #[test]
    fn test_insert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(&sample("B12")).unwrap();

        let tenant = repo.get("B12").unwrap().unwrap();
        assert_eq!(tenant.name, "Alice Wanjiku");
        assert_eq!(tenant.monthly_fee, 3000);
        assert!(repo.get("C04").unwrap().is_none());
    }

    #[test]
    fn test_list_ordered_by_room() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(&sample("C04")).unwrap();
        repo.insert(&sample("A01")).unwrap();
        repo.insert(&sample("B12")).unwrap();

        let rooms: Vec<_> = repo.list().unwrap().into_iter().map(|t| t.room_no).collect();
        assert_eq!(rooms, vec!["A01", "B12", "C04"]);
    }

    #[test]
    fn test_duplicate_room_rejected_by_primary_key() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(&sample("B12")).unwrap();
        assert!(repo.insert(&sample("B12")).is_err());
    }

    #[test]
    fn test_update() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(&sample("B12")).unwrap();

        let mut tenant = repo.get("B12").unwrap().unwrap();
        tenant.name = "Grace Njeri".to_string();
        tenant.monthly_fee = 3500;
        assert!(repo.update(&tenant).unwrap());

        let reloaded = repo.get("B12").unwrap().unwrap();
        assert_eq!(reloaded.name, "Grace Njeri");
        assert_eq!(reloaded.monthly_fee, 3500);
    }

    #[test]
    fn test_update_missing_room_reports_no_change() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(!repo.update(&sample("B12")).unwrap());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.insert(&sample("B12")).unwrap();
        assert!(repo.delete("B12").unwrap());
        assert!(!repo.delete("B12").unwrap());
        assert!(repo.get("B12").unwrap().is_none());
    }
}
