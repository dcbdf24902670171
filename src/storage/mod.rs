//! Storage layer for hostel-ledger
//!
//! SQLite-backed repositories, one per table. Every repository method opens
//! its own connection via the shared [`Database`] handle and drops it when
//! the operation completes.

pub mod db;
pub mod payments;
pub mod tenants;
pub mod users;

pub use db::Database;
pub use payments::PaymentRepository;
pub use tenants::TenantRepository;
pub use users::UserRepository;

use crate::config::paths::HostelPaths;
use crate::error::HostelResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    db: Database,
    pub users: UserRepository,
    pub tenants: TenantRepository,
    pub payments: PaymentRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: HostelPaths) -> HostelResult<Self> {
        // Ensure directories exist
        paths.ensure_directories()?;

        let db = Database::new(paths.db_file());
        Ok(Self {
            users: UserRepository::new(db.clone()),
            tenants: TenantRepository::new(db.clone()),
            payments: PaymentRepository::new(db.clone()),
            db,
        })
    }

    /// Get the underlying database handle
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Create the users table if absent (runs on every startup)
    pub fn ensure_users_table(&self) -> HostelResult<()> {
        self.db.ensure_users_table()
    }

    /// Create the full schema if absent
    pub fn init_schema(&self) -> HostelResult<()> {
        self.db.init_schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HostelPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage.init_schema().unwrap();
        assert!(temp_dir.path().join("payments.db").exists());
        assert!(temp_dir.path().join("exports").exists());
    }
}
