//! User credential model
//!
//! A credential pairs a username with an Argon2id password hash. The username
//! is the key of the credential store, so at most one credential exists per
//! username.

use crate::crypto::password::verify_password;

/// A stored user credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// The unique username
    pub username: String,
    /// Argon2id hash of the password in PHC string format
    pub password_hash: String,
}

impl Credential {
    /// Create a credential from a username and an already-hashed password
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Check a password attempt against the stored hash
    ///
    /// Fails closed: an unparseable stored hash (for example a truncated line
    /// in users.txt) never verifies.
    pub fn verify(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash).unwrap_or(false)
    }
}
