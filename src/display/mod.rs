//! Display formatting for terminal output

pub mod expenses;

pub use expenses::format_expense_list;
