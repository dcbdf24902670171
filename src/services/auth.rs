//! Authentication service
//!
//! Verifies credentials against the users table and produces an explicit
//! [`Session`] value that is handed to the command handlers. Session state is
//! never global: whoever needs to know who is logged in receives the session
//! as an argument.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use log::info;

use crate::error::{HostelError, HostelResult};
use crate::models::{Role, User};
use crate::storage::Storage;

/// Default account seeded when the users table is empty
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// An authenticated session for the remainder of the application run
#[derive(Debug, Clone)]
pub struct Session {
    /// Username that logged in
    pub username: String,
    /// Role of the logged-in user
    pub role: Role,
}

impl Session {
    /// Whether this session may manage tenants
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Service for login and user seeding
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Authenticate a username/password pair
    ///
    /// Unknown usernames and wrong passwords produce the same error so login
    /// failures don't reveal which accounts exist.
    pub fn login(&self, username: &str, password: &str) -> HostelResult<Session> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(HostelError::Validation(
                "Please enter both username and password".into(),
            ));
        }

        let user = self
            .storage
            .users
            .get_by_username(username)?
            .ok_or_else(invalid_credentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(invalid_credentials());
        }

        info!("User '{}' logged in with role {}", user.username, user.role);
        Ok(Session {
            username: user.username,
            role: Role::from_db(&user.role),
        })
    }

    /// Seed the default admin account if the users table is empty
    ///
    /// Returns true if an account was created.
    pub fn ensure_default_admin(&self) -> HostelResult<bool> {
        if self.storage.users.count()? > 0 {
            return Ok(false);
        }

        let user = User {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password_hash: hash_password(DEFAULT_ADMIN_PASSWORD)?,
            role: Role::Admin.as_str().to_string(),
        };
        self.storage.users.insert(&user)?;
        info!("Seeded default admin account");
        Ok(true)
    }
}

fn invalid_credentials() -> HostelError {
    HostelError::Auth("Invalid username or password".into())
}

/// Hash a password with Argon2id in PHC string format
pub fn hash_password(password: &str) -> HostelResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| HostelError::Auth(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2id hash
pub fn verify_password(password: &str, stored_hash: &str) -> HostelResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| HostelError::Auth(format!("Stored password hash is invalid: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HostelError::Auth(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
