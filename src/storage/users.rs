//! User repository

use rusqlite::{params, OptionalExtension};

use super::db::Database;
use crate::error::HostelResult;
use crate::models::User;

/// Repository for the users table
pub struct UserRepository {
    db: Database,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Look up a user by username
    pub fn get_by_username(&self, username: &str) -> HostelResult<Option<User>> {
        let conn = self.db.connect()?;
        let user = conn
            .query_row(
                "SELECT username, password_hash, role FROM users WHERE username = ?1",
                params![username],
                |row| {
                    Ok(User {
                        username: row.get(0)?,
                        password_hash: row.get(1)?,
                        role: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(user)
    }

    /// Count user accounts
    pub fn count(&self) -> HostelResult<i64> {
        let conn = self.db.connect()?;
        let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Insert a new user account
    pub fn insert(&self, user: &User) -> HostelResult<()> {
        let conn = self.db.connect()?;
        conn.execute(
            "INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)",
            params![user.username, user.password_hash, user.role],
        )?;
        Ok(())
    }
}
