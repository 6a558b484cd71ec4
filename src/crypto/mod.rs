//! Cryptographic primitives for MoneyMate
//!
//! Only password hashing lives here; stored financial data is plain text.

pub mod password;

pub use password::{hash_password, verify_password};
