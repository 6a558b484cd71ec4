//! Expense ledger model
//!
//! The ledger maps an expense category to its accumulated amount for the
//! currently logged-in user. It lives for the duration of one session: loaded
//! on login, cleared on logout.
//!
//! Amounts are plain f64 totals. Categories and amounts are deliberately
//! unvalidated: empty categories and negative amounts are accepted, matching
//! the permissive behavior of the file format.

use std::collections::HashMap;

/// In-memory mapping of expense category to accumulated amount
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    totals: HashMap<String, f64>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount to a category's running total
    ///
    /// Creates the category at the given amount if it does not exist yet.
    pub fn add(&mut self, category: &str, amount: f64) {
        *self.totals.entry(category.to_string()).or_insert(0.0) += amount;
    }

    /// Set a category's total outright, replacing any existing value
    ///
    /// Used when repopulating the ledger from disk, where a later line for
    /// the same category wins.
    pub fn insert(&mut self, category: impl Into<String>, amount: f64) {
        self.totals.insert(category.into(), amount);
    }

    /// Get the accumulated total for a category
    pub fn get(&self, category: &str) -> Option<f64> {
        self.totals.get(category).copied()
    }

    /// Get all (category, amount) pairs, sorted by category name
    ///
    /// The underlying map is unordered; sorting here just gives the display
    /// and the persisted file a stable shape.
    pub fn entries(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<_> = self
            .totals
            .iter()
            .map(|(c, a)| (c.clone(), *a))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Check if the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.totals.clear();
    }
}
