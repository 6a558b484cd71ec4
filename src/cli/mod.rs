//! Interactive CLI for MoneyMate

pub mod menu;
pub mod prompt;

pub use menu::run_menu;
