//! Storage layer for MoneyMate
//!
//! Provides flat-file storage with atomic writes and automatic directory
//! creation. Two formats, both line-oriented text: `username,password_hash`
//! in users.txt and `category: amount` in `<username>_expenses.txt`.

pub mod credentials;
pub mod file_io;
pub mod ledger;

pub use credentials::CredentialRepository;
pub use file_io::{read_lines, write_lines_atomic};
pub use ledger::LedgerRepository;

use crate::config::MoneyMatePaths;
use crate::error::MoneyMateError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: MoneyMatePaths,
    pub credentials: CredentialRepository,
    pub ledgers: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: MoneyMatePaths) -> Result<Self, MoneyMateError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        let credentials = CredentialRepository::new(paths.credentials_file());
        let ledgers = LedgerRepository::new(paths.clone());

        Ok(Self {
            paths,
            credentials,
            ledgers,
        })
    }

    /// Load all process-lifetime data from disk
    ///
    /// Only the credential store lives for the whole process; ledgers are
    /// loaded per session at login time.
    pub fn load_all(&self) -> Result<(), MoneyMateError> {
        self.credentials.load()
    }

    /// Persist the credential store
    ///
    /// Called once on the normal exit path; a crash before exit loses
    /// unsaved registrations.
    pub fn persist_credentials(&self) -> Result<(), MoneyMateError> {
        self.credentials.save()
    }

    /// Get the path configuration
    pub fn paths(&self) -> &MoneyMatePaths {
        &self.paths
    }
}
