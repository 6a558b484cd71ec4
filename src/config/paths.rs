//! Path management for MoneyMate
//!
//! Resolves where the credentials file and per-user ledger files live.
//!
//! ## Path Resolution Order
//!
//! 1. `MONEYMATE_DATA_DIR` environment variable (if set)
//! 2. The current working directory (`users.txt` lives beside the binary)

use std::path::PathBuf;

use crate::error::MoneyMateError;

/// Manages all paths used by MoneyMate
#[derive(Debug, Clone)]
pub struct MoneyMatePaths {
    /// Base directory for all MoneyMate data
    base_dir: PathBuf,
}

impl MoneyMatePaths {
    /// Create a new MoneyMatePaths instance
    ///
    /// Path resolution:
    /// 1. `MONEYMATE_DATA_DIR` env var (explicit override)
    /// 2. The current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, MoneyMateError> {
        let base_dir = if let Ok(custom) = std::env::var("MONEYMATE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                MoneyMateError::Io(format!("Could not determine current directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create MoneyMatePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the credentials file (users.txt)
    pub fn credentials_file(&self) -> PathBuf {
        self.base_dir.join("users.txt")
    }

    /// Get the path to a user's ledger file (<username>_expenses.txt)
    pub fn ledger_file(&self, username: &str) -> PathBuf {
        self.base_dir.join(format!("{}_expenses.txt", username))
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), MoneyMateError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneyMateError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }
}
