//! Database handle and schema management
//!
//! Every operation opens its own short-lived connection and releases it on
//! scope exit; there is no pooling and no shared transactional state. Each
//! connection enables foreign-key enforcement before use.

use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::Connection;

use crate::error::HostelResult;

/// Handle to the SQLite database file
#[derive(Debug, Clone)]
pub struct Database {
    db_path: PathBuf,
}

impl Database {
    /// Create a handle for the given database file (does not open it)
    pub fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Open a connection with foreign-key enforcement enabled
    pub fn connect(&self) -> HostelResult<Connection> {
        debug!("Opening connection to {}", self.db_path.display());
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    /// Create the users table if it doesn't exist
    ///
    /// Runs on every startup so login works even against a pre-existing
    /// rooms/payments database that was never initialized by this tool.
    pub fn ensure_users_table(&self) -> HostelResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE,
                password_hash TEXT,
                role TEXT
            );",
        )?;
        Ok(())
    }

    /// Create the full schema (users, rooms, payments) if absent
    pub fn init_schema(&self) -> HostelResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE,
                password_hash TEXT,
                role TEXT
            );
            CREATE TABLE IF NOT EXISTS rooms (
                room_no TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                phone TEXT NOT NULL DEFAULT '',
                monthly_fee INTEGER NOT NULL DEFAULT 0,
                holiday_fee INTEGER NOT NULL DEFAULT 0
            );
            CREATE TABLE IF NOT EXISTS payments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                room_no TEXT NOT NULL REFERENCES rooms(room_no),
                month TEXT NOT NULL,
                year INTEGER NOT NULL,
                amount INTEGER NOT NULL
            );",
        )?;
        info!("Database schema ready at {}", self.db_path.display());
        Ok(())
    }
}
