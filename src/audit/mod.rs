//! Audit trail for ledger mutations
//!
//! Every accepted add and delete is appended to an append-only log, one JSON
//! object per line (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use billetera::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&expense))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
