//! In-process ledger store
//!
//! Holds the serialized collection in memory, so it exercises the same JSON
//! encoding as the file store. Read and write failures can be switched on to
//! simulate an unavailable medium.

use crate::error::{BilleteraError, BilleteraResult};
use crate::models::Expense;

use super::ExpenseStore;

/// Store backed by an in-memory JSON document
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
    saves: usize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding raw serialized contents
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Make subsequent loads fail
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make subsequent saves fail
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Serialized contents as last saved
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ExpenseStore for MemoryStore {
    fn load(&self) -> BilleteraResult<Vec<Expense>> {
        if self.fail_reads {
            return Err(BilleteraError::StorageUnavailable(
                "memory store is unreadable".into(),
            ));
        }

        match &self.contents {
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| BilleteraError::StorageUnavailable(format!("Failed to parse: {}", e))),
            None => Ok(Vec::new()),
        }
    }

    fn save(&mut self, expenses: &[Expense]) -> BilleteraResult<()> {
        if self.fail_writes {
            return Err(BilleteraError::StorageUnavailable(
                "memory store is read-only".into(),
            ));
        }

        let raw = serde_json::to_string(expenses).map_err(|e| {
            BilleteraError::StorageUnavailable(format!("Failed to serialize: {}", e))
        })?;
        self.contents = Some(raw);
        self.saves += 1;
        Ok(())
    }
}
