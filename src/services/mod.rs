//! Service layer for Billetera
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and persistence of every ledger mutation.

pub mod ledger;
pub mod notice;

pub use ledger::{DeleteRequest, LedgerService};
pub use notice::{Notice, NoticeLevel};
