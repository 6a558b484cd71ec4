//! Ledger repository for flat-file storage
//!
//! Manages loading and saving a user's expense totals to
//! `<username>_expenses.txt`. Each line is `category: amount`; the split
//! happens on the first colon, the category is trimmed, and the amount is
//! parsed as a float. Lines with no colon or an unparseable number are
//! skipped entirely rather than recorded as zero.

use crate::config::MoneyMatePaths;
use crate::error::MoneyMateError;
use crate::models::Ledger;

use super::file_io::{read_lines, write_lines_atomic};

/// Repository for per-user ledger persistence
pub struct LedgerRepository {
    paths: MoneyMatePaths,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(paths: MoneyMatePaths) -> Self {
        Self { paths }
    }

    /// Load a user's ledger from disk
    ///
    /// A missing file means the user has no saved expenses yet and yields an
    /// empty ledger. A repeated category line replaces the earlier value.
    pub fn load(&self, username: &str) -> Result<Ledger, MoneyMateError> {
        let mut ledger = Ledger::new();

        let Some(lines) = read_lines(self.paths.ledger_file(username))? else {
            return Ok(ledger);
        };

        for line in lines {
            let Some((category, amount)) = line.split_once(':') else {
                continue;
            };
            let Ok(amount) = amount.trim().parse::<f64>() else {
                continue;
            };
            ledger.insert(category.trim(), amount);
        }

        Ok(ledger)
    }

    /// Save a user's ledger to disk, overwriting the file
    ///
    /// Amounts are written with default float formatting (`15` for 15.0,
    /// `12.5` for 12.50); the loader accepts anything f64 parsing accepts.
    pub fn save(&self, username: &str, ledger: &Ledger) -> Result<(), MoneyMateError> {
        let lines: Vec<String> = ledger
            .entries()
            .into_iter()
            .map(|(category, amount)| format!("{}: {}", category, amount))
            .collect();

        write_lines_atomic(self.paths.ledger_file(username), &lines)
    }

    /// Check if a user has a saved ledger file
    pub fn exists(&self, username: &str) -> bool {
        self.paths.ledger_file(username).exists()
    }
}
