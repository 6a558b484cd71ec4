//! Authentication service
//!
//! Provides registration and password verification against the credential
//! store. Registration is valid regardless of session state and only mutates
//! the in-memory store; persistence happens once, on process exit.

use crate::crypto::password::hash_password;
use crate::error::{MoneyMateError, MoneyMateResult};
use crate::models::Credential;
use crate::storage::Storage;

/// Service for user registration and authentication
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// Fails with `DuplicateUser` if the username is taken; the existing
    /// credential is left unchanged. No password strength or emptiness
    /// rules are imposed.
    pub fn register(&self, username: &str, password: &str) -> MoneyMateResult<()> {
        if self.storage.credentials.contains(username)? {
            return Err(MoneyMateError::duplicate_user(username));
        }

        let hash = hash_password(password)?;
        self.storage
            .credentials
            .insert(Credential::new(username, hash))
    }

    /// Verify a username/password pair
    ///
    /// Fails closed: an unknown username is `UserNotFound`, a hash mismatch
    /// (including an unusable stored hash) is `BadPassword`.
    pub fn authenticate(&self, username: &str, password: &str) -> MoneyMateResult<()> {
        let credential = self
            .storage
            .credentials
            .get(username)?
            .ok_or_else(|| MoneyMateError::user_not_found(username))?;

        if credential.verify(password) {
            Ok(())
        } else {
            Err(MoneyMateError::BadPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MoneyMatePaths;
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir) -> Storage {
        Storage::new(MoneyMatePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap()
    }

    #[test]
    fn test_register_and_authenticate() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        let auth = AuthService::new(&storage);

        auth.register("alice", "pw1").unwrap();
        auth.authenticate("alice", "pw1").unwrap();
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        let auth = AuthService::new(&storage);

        auth.register("alice", "pw1").unwrap();
        let err = auth.register("alice", "pw2").unwrap_err();
        assert!(matches!(err, MoneyMateError::DuplicateUser { .. }));

        // Original credential is unchanged
        auth.authenticate("alice", "pw1").unwrap();
        assert!(matches!(
            auth.authenticate("alice", "pw2").unwrap_err(),
            MoneyMateError::BadPassword
        ));
    }

    #[test]
    fn test_unknown_user_fails_closed() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        let auth = AuthService::new(&storage);

        let err = auth.authenticate("nobody", "pw").unwrap_err();
        assert!(matches!(err, MoneyMateError::UserNotFound { .. }));
    }

    #[test]
    fn test_password_is_case_sensitive() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        let auth = AuthService::new(&storage);

        auth.register("alice", "Secret").unwrap();
        assert!(matches!(
            auth.authenticate("alice", "secret").unwrap_err(),
            MoneyMateError::BadPassword
        ));
    }

    #[test]
    fn test_empty_credentials_allowed() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        let auth = AuthService::new(&storage);

        auth.register("", "").unwrap();
        auth.authenticate("", "").unwrap();
    }

    #[test]
    fn test_register_does_not_write_to_disk() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        AuthService::new(&storage).register("alice", "pw1").unwrap();

        // Persistence is deferred to the exit path
        assert!(!storage.paths().credentials_file().exists());

        storage.persist_credentials().unwrap();
        assert!(storage.paths().credentials_file().exists());
    }

    #[test]
    fn test_stored_hash_is_not_plaintext() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        AuthService::new(&storage).register("alice", "pw1").unwrap();
        storage.persist_credentials().unwrap();

        let contents = std::fs::read_to_string(storage.paths().credentials_file()).unwrap();
        assert!(contents.starts_with("alice,"));
        assert!(!contents.contains("pw1"));
    }
}
