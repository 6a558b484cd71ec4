//! Credential repository for flat-file storage
//!
//! Manages loading and saving user credentials to users.txt. Each line is
//! `username,password_hash`; the split happens on the first comma, so a line
//! with no comma yields an empty hash field (which then never verifies)
//! rather than an error.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MoneyMateError;
use crate::models::Credential;

use super::file_io::{read_lines, write_lines_atomic};

/// Repository for credential persistence
pub struct CredentialRepository {
    path: PathBuf,
    data: RwLock<HashMap<String, Credential>>,
}

impl CredentialRepository {
    /// Create a new credential repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load credentials from disk
    ///
    /// A missing file is treated as "no users yet". Blank lines are skipped.
    pub fn load(&self) -> Result<(), MoneyMateError> {
        let lines = read_lines(&self.path)?.unwrap_or_default();

        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyMateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            // Split on the first comma; a missing hash field becomes ""
            let (username, hash) = line.split_once(',').unwrap_or((line.as_str(), ""));
            data.insert(
                username.to_string(),
                Credential::new(username, hash),
            );
        }

        Ok(())
    }

    /// Save all credentials to disk, overwriting the file
    ///
    /// Line order follows map iteration and is unspecified. Called once on
    /// the normal exit path; registrations are not persisted incrementally.
    pub fn save(&self) -> Result<(), MoneyMateError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyMateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let lines: Vec<String> = data
            .values()
            .map(|c| format!("{},{}", c.username, c.password_hash))
            .collect();

        write_lines_atomic(&self.path, &lines)
    }

    /// Get a credential by username
    pub fn get(&self, username: &str) -> Result<Option<Credential>, MoneyMateError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyMateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(username).cloned())
    }

    /// Insert a credential, replacing any existing entry for the username
    pub fn insert(&self, credential: Credential) -> Result<(), MoneyMateError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| MoneyMateError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(credential.username.clone(), credential);
        Ok(())
    }

    /// Check if a username is already registered
    pub fn contains(&self, username: &str) -> Result<bool, MoneyMateError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyMateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(username))
    }

    /// Number of registered users
    pub fn len(&self) -> Result<usize, MoneyMateError> {
        let data = self
            .data
            .read()
            .map_err(|e| MoneyMateError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Check if no users are registered
    pub fn is_empty(&self) -> Result<bool, MoneyMateError> {
        Ok(self.len()? == 0)
    }
}
