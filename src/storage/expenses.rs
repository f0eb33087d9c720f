//! Expense repository for JSON storage
//!
//! Persists the ledger to expenses.json as a top-level array, newest first.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::paths::BilleteraPaths;
use crate::error::BilleteraResult;
use crate::models::Expense;

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseStore;

/// File-backed ledger store
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a repository writing to `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a repository at the standard location
    pub fn from_paths(paths: &BilleteraPaths) -> Self {
        Self::new(paths.expenses_file())
    }

    /// Location of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for ExpenseRepository {
    fn load(&self) -> BilleteraResult<Vec<Expense>> {
        let expenses: Vec<Expense> = read_json(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to load ledger");
            e
        })?;
        debug!(path = %self.path.display(), count = expenses.len(), "ledger loaded");
        Ok(expenses)
    }

    fn save(&mut self, expenses: &[Expense]) -> BilleteraResult<()> {
        write_json_atomic(&self.path, expenses).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to save ledger");
            e
        })?;
        debug!(path = %self.path.display(), count = expenses.len(), "ledger saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Category};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BilleteraPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, ExpenseRepository::from_paths(&paths))
    }

    fn coffee() -> Expense {
        Expense::new(
            "Coffee",
            Amount::parse("3.50").unwrap(),
            "2024-05-01",
            Category::Food,
            "2024-05".parse().unwrap(),
        )
    }

    #[test]
    fn test_load_without_file_is_empty() {
        let (_temp, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let (_temp, mut repo) = create_test_repo();
        let expense = coffee();

        repo.save(std::slice::from_ref(&expense)).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, vec![expense]);
    }

    #[test]
    fn test_save_load_is_stable() {
        let (_temp, mut repo) = create_test_repo();
        let bus = Expense::new(
            "Bus",
            Amount::parse("1.20").unwrap(),
            "2024-05-02",
            Category::Transport,
            "2024-05".parse().unwrap(),
        );
        repo.save(&[bus, coffee()]).unwrap();
        let before = fs::read_to_string(repo.path()).unwrap();

        let loaded = repo.load().unwrap();
        repo.save(&loaded).unwrap();
        let after = fs::read_to_string(repo.path()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_reads_legacy_records() {
        let (_temp, repo) = create_test_repo();
        fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
        fs::write(
            repo.path(),
            r#"[{"id":"1714564800000","name":"Libro","amount":20,"date":"2024-05-01","category":"Libros"}]"#,
        )
        .unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].period.to_string(), "2024-05");
        assert_eq!(loaded[0].category, Category::Books);
    }

    #[test]
    fn test_corrupt_file_is_storage_unavailable() {
        let (_temp, repo) = create_test_repo();
        fs::create_dir_all(repo.path().parent().unwrap()).unwrap();
        fs::write(repo.path(), "{ not an array").unwrap();

        assert!(repo.load().unwrap_err().is_storage());
    }
}
