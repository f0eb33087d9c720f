//! Storage layer for Billetera
//!
//! The ledger is persisted as one serialized collection. Stores expose only
//! whole-collection `load` and `save`; there is no partial update.

pub mod expenses;
pub mod file_io;
pub mod memory;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use memory::MemoryStore;

use crate::error::BilleteraResult;
use crate::models::Expense;

/// Whole-collection persistence for the expense ledger
pub trait ExpenseStore {
    /// Read the full collection
    ///
    /// A medium with no prior data yields an empty collection. Failures are
    /// reported as `StorageUnavailable`.
    fn load(&self) -> BilleteraResult<Vec<Expense>>;

    /// Replace the persisted collection with `expenses` as one unit
    fn save(&mut self, expenses: &[Expense]) -> BilleteraResult<()>;
}

impl<S: ExpenseStore + ?Sized> ExpenseStore for Box<S> {
    fn load(&self) -> BilleteraResult<Vec<Expense>> {
        (**self).load()
    }

    fn save(&mut self, expenses: &[Expense]) -> BilleteraResult<()> {
        (**self).save(expenses)
    }
}
