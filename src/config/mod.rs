//! Configuration and path management for MoneyMate

pub mod paths;

pub use paths::MoneyMatePaths;
