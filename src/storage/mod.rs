//! Storage layer for the budget tracker
//!
//! The whole store state lives in one JSON document written atomically.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use crate::audit::AuditLogger;
use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::store::{BudgetState, BudgetStore};

/// Persistence for the store state and access to the audit log
pub struct Storage {
    paths: BudgetPaths,
}

impl Storage {
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load the persisted state, or an empty one on first run
    pub fn load_state(&self) -> Result<BudgetState, BudgetError> {
        read_json(self.paths.state_file())
    }

    pub fn save_state(&self, state: &BudgetState) -> Result<(), BudgetError> {
        write_json_atomic(self.paths.state_file(), state)
    }

    pub fn audit_logger(&self) -> AuditLogger {
        AuditLogger::new(self.paths.audit_log())
    }

    /// Build a store from disk with audit logging attached
    pub fn open_store(&self) -> Result<BudgetStore, BudgetError> {
        Ok(BudgetStore::new(self.load_state()?).with_audit(self.audit_logger()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, NewExpense};
    use crate::store::{Change, Intent};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, _storage) = create_storage();
        assert!(temp_dir.path().join("data").exists());
    }

    #[test]
    fn test_first_run_is_empty() {
        let (_temp, storage) = create_storage();
        assert_eq!(storage.load_state().unwrap(), BudgetState::default());
    }

    #[test]
    fn test_store_state_survives_reload() {
        let (_temp, storage) = create_storage();

        let mut store = storage.open_store().unwrap();
        store
            .dispatch(Intent::DefineBudget {
                budget: Money::from_units(300),
            })
            .unwrap();
        storage.save_state(store.state()).unwrap();

        let reopened = storage.open_store().unwrap();
        assert_eq!(reopened.state().budget, Money::from_units(300));
        assert_eq!(storage.audit_logger().entry_count().unwrap(), 1);
    }

    #[test]
    fn test_edit_and_filter_are_not_saved() {
        let (_temp, storage) = create_storage();

        let mut store = storage.open_store().unwrap();
        store
            .dispatch(Intent::DefineBudget {
                budget: Money::from_units(100),
            })
            .unwrap();
        let id = match store
            .dispatch(Intent::AddExpense {
                expense: NewExpense {
                    name: "Coffee".into(),
                    amount: Money::from_units(5),
                    category: Category::Food,
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                },
            })
            .unwrap()
        {
            Change::ExpenseAdded(id) => id,
            other => panic!("unexpected change {:?}", other),
        };
        store.dispatch(Intent::EditExpense { id }).unwrap();
        store
            .dispatch(Intent::FilterCategory {
                category: Some(Category::Food),
            })
            .unwrap();
        storage.save_state(store.state()).unwrap();

        let raw = std::fs::read_to_string(storage.paths().state_file()).unwrap();
        assert!(!raw.contains("editing_id"));
        assert!(!raw.contains("current_category"));

        let reopened = storage.open_store().unwrap();
        assert_eq!(reopened.state().editing_id, None);
        assert_eq!(reopened.state().current_category, None);
        assert_eq!(reopened.state().expenses.len(), 1);
        assert_eq!(reopened.state().expense(id).unwrap().name, "Coffee");
    }
}
