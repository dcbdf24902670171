//! User account model

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a user account
///
/// Only `Admin` carries extra privileges (tenant management); any other role
/// string stored in the database is treated as unprivileged staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Map a role string from the users table to a role
    pub fn from_db(s: &str) -> Self {
        if s == "Admin" {
            Role::Admin
        } else {
            Role::Staff
        }
    }

    /// The string stored in the users table
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as stored in the users table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique login name
    pub username: String,
    /// Argon2id password hash (PHC string format)
    pub password_hash: String,
    /// Role string as stored; mapped through [`Role::from_db`] at login
    pub role: String,
}
