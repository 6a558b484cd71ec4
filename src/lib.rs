//! MoneyMate - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the MoneyMate expense
//! tracker. One user at a time logs in against a credential store and
//! accumulates named expense totals that persist to a per-user file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (credentials, the expense ledger)
//! - `crypto`: Password hashing
//! - `storage`: Flat-file storage layer
//! - `services`: Business logic layer (registration, the login session)
//! - `display`: Terminal output formatting
//! - `cli`: Interactive menu driver
//!
//! # Example
//!
//! ```rust,ignore
//! use moneymate::config::paths::MoneyMatePaths;
//! use moneymate::storage::Storage;
//!
//! let paths = MoneyMatePaths::new()?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::MoneyMateError;
