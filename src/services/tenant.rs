//! Tenant service
//!
//! Provides business logic for tenant management: validated CRUD against the
//! rooms table and the in-memory search filter used by the list view.

use crate::error::{HostelError, HostelResult};
use crate::models::Tenant;
use crate::storage::Storage;

/// Service for tenant management
pub struct TenantService<'a> {
    storage: &'a Storage,
}

impl<'a> TenantService<'a> {
    /// Create a new tenant service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new tenant
    pub fn create(
        &self,
        room_no: &str,
        name: &str,
        phone: &str,
        monthly_fee: i64,
        holiday_fee: i64,
    ) -> HostelResult<Tenant> {
        let tenant = Tenant::new(
            room_no.trim(),
            name.trim(),
            phone.trim(),
            monthly_fee,
            holiday_fee,
        );
        tenant.validate()?;

        if self.storage.tenants.get(&tenant.room_no)?.is_some() {
            return Err(HostelError::Duplicate {
                entity_type: "Tenant",
                identifier: tenant.room_no.clone(),
            });
        }

        self.storage.tenants.insert(&tenant)?;
        Ok(tenant)
    }

    /// Update an existing tenant; fields left as `None` keep their value
    pub fn update(
        &self,
        room_no: &str,
        name: Option<&str>,
        phone: Option<&str>,
        monthly_fee: Option<i64>,
        holiday_fee: Option<i64>,
    ) -> HostelResult<Tenant> {
        let mut tenant = self
            .storage
            .tenants
            .get(room_no)?
            .ok_or_else(|| HostelError::tenant_not_found(room_no))?;

        if let Some(name) = name {
            tenant.name = name.trim().to_string();
        }
        if let Some(phone) = phone {
            tenant.phone = phone.trim().to_string();
        }
        if let Some(fee) = monthly_fee {
            tenant.monthly_fee = fee;
        }
        if let Some(fee) = holiday_fee {
            tenant.holiday_fee = fee;
        }

        tenant.validate()?;
        self.storage.tenants.update(&tenant)?;
        Ok(tenant)
    }

    /// Delete a tenant, returning the removed record
    pub fn delete(&self, room_no: &str) -> HostelResult<Tenant> {
        let tenant = self
            .storage
            .tenants
            .get(room_no)?
            .ok_or_else(|| HostelError::tenant_not_found(room_no))?;

        self.storage.tenants.delete(room_no)?;
        Ok(tenant)
    }

    /// Get a tenant by room number
    pub fn get(&self, room_no: &str) -> HostelResult<Option<Tenant>> {
        self.storage.tenants.get(room_no)
    }

    /// List all tenants ordered by room number
    pub fn list(&self) -> HostelResult<Vec<Tenant>> {
        self.storage.tenants.list()
    }

    /// List tenants matching a search query over room number and occupant
    /// name; a blank query returns everyone
    pub fn search(&self, query: &str) -> HostelResult<Vec<Tenant>> {
        let query = query.trim();
        let tenants = self.storage.tenants.list()?;
        if query.is_empty() {
            return Ok(tenants);
        }
        Ok(tenants.into_iter().filter(|t| t.matches(query)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HostelPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = HostelPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.init_schema().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_tenant() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TenantService::new(&storage);

        let tenant = service
            .create(" B12 ", "Alice Wanjiku", "0712345678", 3000, 1000)
            .unwrap();
        assert_eq!(tenant.room_no, "B12");
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TenantService::new(&storage);

        let err = service.create("B12", "  ", "0712", 3000, 1000).unwrap_err();
        assert!(err.is_validation());
        // Nothing was written
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_duplicate_room() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TenantService::new(&storage);

        service
            .create("B12", "Alice", "0712", 3000, 1000)
            .unwrap();
        let err = service
            .create("B12", "Brian", "0733", 3000, 1000)
            .unwrap_err();
        assert!(err.is_duplicate());
    }

    #[test]
    fn test_update_keeps_unspecified_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TenantService::new(&storage);
        service
            .create("B12", "Alice", "0712", 3000, 1000)
            .unwrap();

        let updated = service
            .update("B12", Some("Grace Njeri"), None, None, Some(1200))
            .unwrap();
        assert_eq!(updated.name, "Grace Njeri");
        assert_eq!(updated.phone, "0712");
        assert_eq!(updated.monthly_fee, 3000);
        assert_eq!(updated.holiday_fee, 1200);
    }

    #[test]
    fn test_update_missing_tenant() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TenantService::new(&storage);

        let err = service.update("ZZ9", Some("Nobody"), None, None, None).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_tenant() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TenantService::new(&storage);
        service
            .create("B12", "Alice", "0712", 3000, 1000)
            .unwrap();

        let removed = service.delete("B12").unwrap();
        assert_eq!(removed.name, "Alice");
        assert!(service.get("B12").unwrap().is_none());
        assert!(service.delete("B12").unwrap_err().is_not_found());
    }

    #[test]
    fn test_search() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TenantService::new(&storage);
        service
            .create("A01", "Alice Wanjiku", "0712", 3000, 1000)
            .unwrap();
        service
            .create("B12", "Brian Otieno", "0733", 3000, 1000)
            .unwrap();

        assert_eq!(service.search("").unwrap().len(), 2);
        assert_eq!(service.search("alice").unwrap().len(), 1);
        assert_eq!(service.search("b1").unwrap().len(), 1);
        assert!(service.search("zebra").unwrap().is_empty());
    }
}
