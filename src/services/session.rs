//! Login session and ledger operations
//!
//! At most one user is logged in at a time. The session owns the in-memory
//! ledger and a dirty flag; the ledger is loaded from the user's file on
//! login and cleared on logout. The save-or-discard choice for a dirty
//! ledger at logout belongs to the driver, which checks
//! `has_unsaved_changes()` before calling `logout()`.

use crate::error::{MoneyMateError, MoneyMateResult};
use crate::models::Ledger;
use crate::services::AuthService;
use crate::storage::Storage;

/// The login session state machine: logged out, or logged in as one user
#[derive(Default)]
pub struct Session {
    user: Option<String>,
    ledger: Ledger,
    dirty: bool,
}

impl Session {
    /// Create a new logged-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// The username of the active user, if any
    pub fn current_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Check whether a user is logged in
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Check whether the ledger has mutations since the last successful save
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Log a user in
    ///
    /// Fails with `AlreadyLoggedIn` if a session is active (the current
    /// ledger is untouched), or with the authentication failure from the
    /// credential store. On success the user's saved ledger is loaded
    /// (missing file means empty ledger) and the dirty flag is cleared.
    pub fn login(&mut self, storage: &Storage, username: &str, password: &str) -> MoneyMateResult<()> {
        if let Some(current) = &self.user {
            return Err(MoneyMateError::already_logged_in(current.clone()));
        }

        AuthService::new(storage).authenticate(username, password)?;

        self.ledger = storage.ledgers.load(username)?;
        self.user = Some(username.to_string());
        self.dirty = false;
        Ok(())
    }

    /// Log the active user out, clearing the ledger and dirty flag
    ///
    /// Returns the username that was logged out. Any unsaved changes are
    /// discarded; the driver is expected to have offered a save first.
    pub fn logout(&mut self) -> MoneyMateResult<String> {
        let username = self.user.take().ok_or(MoneyMateError::NotLoggedIn)?;
        self.ledger.clear();
        self.dirty = false;
        Ok(username)
    }

    /// Add an amount to a category's running total
    ///
    /// Permissive on purpose: negative amounts and empty categories are
    /// accepted. Marks the ledger dirty.
    pub fn add_expense(&mut self, category: &str, amount: f64) -> MoneyMateResult<()> {
        if self.user.is_none() {
            return Err(MoneyMateError::NotLoggedIn);
        }

        self.ledger.add(category, amount);
        self.dirty = true;
        Ok(())
    }

    /// Snapshot of all (category, amount) pairs, sorted by category
    ///
    /// An empty vec is the explicit "no expenses" signal for the driver.
    pub fn expenses(&self) -> MoneyMateResult<Vec<(String, f64)>> {
        if self.user.is_none() {
            return Err(MoneyMateError::NotLoggedIn);
        }

        Ok(self.ledger.entries())
    }

    /// Persist the ledger to the user's expenses file
    ///
    /// Clears the dirty flag only if the write succeeds.
    pub fn save(&mut self, storage: &Storage) -> MoneyMateResult<()> {
        let username = self.user.as_ref().ok_or(MoneyMateError::NotLoggedIn)?;

        storage.ledgers.save(username, &self.ledger)?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MoneyMatePaths;
    use tempfile::TempDir;

    fn storage_with_user(temp_dir: &TempDir, username: &str, password: &str) -> Storage {
        let storage =
            Storage::new(MoneyMatePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        AuthService::new(&storage).register(username, password).unwrap();
        storage
    }

    #[test]
    fn test_initial_state_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.current_user(), None);
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_login_logout_cycle() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_user(&temp_dir, "alice", "pw1");
        let mut session = Session::new();

        session.login(&storage, "alice", "pw1").unwrap();
        assert_eq!(session.current_user(), Some("alice"));

        let logged_out = session.logout().unwrap();
        assert_eq!(logged_out, "alice");
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_login_with_bad_password_leaves_state_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_user(&temp_dir, "alice", "pw1");
        let mut session = Session::new();

        let err = session.login(&storage, "alice", "wrong").unwrap_err();
        assert!(matches!(err, MoneyMateError::BadPassword));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_double_login_fails_and_keeps_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_user(&temp_dir, "alice", "pw1");
        AuthService::new(&storage).register("bob", "pw2").unwrap();

        let mut session = Session::new();
        session.login(&storage, "alice", "pw1").unwrap();
        session.add_expense("food", 10.0).unwrap();

        let err = session.login(&storage, "bob", "pw2").unwrap_err();
        assert!(matches!(err, MoneyMateError::AlreadyLoggedIn { .. }));

        // Still alice, ledger not reset
        assert_eq!(session.current_user(), Some("alice"));
        assert_eq!(session.expenses().unwrap(), vec![("food".to_string(), 10.0)]);
    }

    #[test]
    fn test_ledger_ops_require_login() {
        let mut session = Session::new();

        assert!(matches!(
            session.add_expense("food", 1.0).unwrap_err(),
            MoneyMateError::NotLoggedIn
        ));
        assert!(matches!(
            session.expenses().unwrap_err(),
            MoneyMateError::NotLoggedIn
        ));
        assert!(matches!(session.logout().unwrap_err(), MoneyMateError::NotLoggedIn));

        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(MoneyMatePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        assert!(matches!(
            session.save(&storage).unwrap_err(),
            MoneyMateError::NotLoggedIn
        ));
    }

    #[test]
    fn test_add_expense_accumulates_and_marks_dirty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_user(&temp_dir, "alice", "pw1");
        let mut session = Session::new();
        session.login(&storage, "alice", "pw1").unwrap();

        assert!(!session.has_unsaved_changes());
        session.add_expense("food", 10.0).unwrap();
        session.add_expense("food", 5.0).unwrap();
        assert!(session.has_unsaved_changes());

        assert_eq!(session.expenses().unwrap(), vec![("food".to_string(), 15.0)]);
    }

    #[test]
    fn test_save_clears_dirty_flag_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_user(&temp_dir, "alice", "pw1");
        let mut session = Session::new();
        session.login(&storage, "alice", "pw1").unwrap();

        session.add_expense("food", 15.0).unwrap();
        session.save(&storage).unwrap();
        assert!(!session.has_unsaved_changes());

        let contents =
            std::fs::read_to_string(temp_dir.path().join("alice_expenses.txt")).unwrap();
        assert_eq!(contents, "food: 15\n");
    }

    #[test]
    fn test_login_reloads_saved_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_user(&temp_dir, "alice", "pw1");
        let mut session = Session::new();

        session.login(&storage, "alice", "pw1").unwrap();
        session.add_expense("food", 12.5).unwrap();
        session.add_expense("rent", 900.0).unwrap();
        session.save(&storage).unwrap();
        session.logout().unwrap();

        session.login(&storage, "alice", "pw1").unwrap();
        assert_eq!(
            session.expenses().unwrap(),
            vec![("food".to_string(), 12.5), ("rent".to_string(), 900.0)]
        );
        assert!(!session.has_unsaved_changes());
    }

    #[test]
    fn test_logout_without_save_discards_changes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_user(&temp_dir, "alice", "pw1");
        let mut session = Session::new();

        session.login(&storage, "alice", "pw1").unwrap();
        session.add_expense("food", 10.0).unwrap();
        session.logout().unwrap();

        // Never saved, so no file on disk
        assert!(!temp_dir.path().join("alice_expenses.txt").exists());

        session.login(&storage, "alice", "pw1").unwrap();
        assert!(session.expenses().unwrap().is_empty());
    }

    #[test]
    fn test_discarded_changes_keep_last_saved_state() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_with_user(&temp_dir, "alice", "pw1");
        let mut session = Session::new();

        session.login(&storage, "alice", "pw1").unwrap();
        session.add_expense("food", 10.0).unwrap();
        session.save(&storage).unwrap();
        session.add_expense("food", 99.0).unwrap();
        session.logout().unwrap();

        session.login(&storage, "alice", "pw1").unwrap();
        assert_eq!(session.expenses().unwrap(), vec![("food".to_string(), 10.0)]);
    }

    #[test]
    fn test_full_scenario() {
        // register -> login -> add twice -> view -> save -> clean logout
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(MoneyMatePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        AuthService::new(&storage).register("alice", "pw1").unwrap();

        let mut session = Session::new();
        session.login(&storage, "alice", "pw1").unwrap();
        session.add_expense("food", 10.0).unwrap();
        session.add_expense("food", 5.0).unwrap();

        assert_eq!(session.expenses().unwrap(), vec![("food".to_string(), 15.0)]);

        session.save(&storage).unwrap();
        let contents =
            std::fs::read_to_string(temp_dir.path().join("alice_expenses.txt")).unwrap();
        assert!(contents.contains("food: 15"));

        // Clean logout: nothing left unsaved
        assert!(!session.has_unsaved_changes());
        session.logout().unwrap();
    }
}
