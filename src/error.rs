//! Custom error types for MoneyMate
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for MoneyMate operations
#[derive(Error, Debug)]
pub enum MoneyMateError {
    /// Registration attempted with a username that is already taken
    #[error("Username already exists: {username}")]
    DuplicateUser { username: String },

    /// Login attempted with an unknown username
    #[error("Username not found: {username}")]
    UserNotFound { username: String },

    /// Login attempted with the wrong password
    #[error("Incorrect password")]
    BadPassword,

    /// Login attempted while another user is active
    #[error("User '{username}' is already logged in")]
    AlreadyLoggedIn { username: String },

    /// Ledger operation attempted without an active session
    #[error("No user is logged in")]
    NotLoggedIn,

    /// Password hashing or verification errors
    #[error("Hash error: {0}")]
    Hash(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl MoneyMateError {
    /// Create a "duplicate user" error
    pub fn duplicate_user(username: impl Into<String>) -> Self {
        Self::DuplicateUser {
            username: username.into(),
        }
    }

    /// Create a "user not found" error
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound {
            username: username.into(),
        }
    }

    /// Create an "already logged in" error for the given active user
    pub fn already_logged_in(username: impl Into<String>) -> Self {
        Self::AlreadyLoggedIn {
            username: username.into(),
        }
    }

    /// Check if this is an authentication failure (unknown user or bad password)
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::UserNotFound { .. } | Self::BadPassword)
    }

    /// Check if this is a session-state violation
    pub fn is_session_error(&self) -> bool {
        matches!(self, Self::AlreadyLoggedIn { .. } | Self::NotLoggedIn)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MoneyMateError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for MoneyMate operations
pub type MoneyMateResult<T> = Result<T, MoneyMateError>;
