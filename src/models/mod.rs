//! Core data models for MoneyMate

pub mod credential;
pub mod ledger;

pub use credential::Credential;
pub use ledger::Ledger;
