//! Billetera - a personal expense tracker behind a biometric gate
//!
//! This library provides the core of the Billetera wallet: a persisted
//! ledger of expenses filed by month, derived statistics, and the
//! authentication gate that guards access to them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, amounts, categories, months)
//! - `storage`: The ledger store and its JSON file implementation
//! - `services`: The ledger view-model and user-facing notices
//! - `reports`: Period filtering, totals and category breakdowns
//! - `auth`: The biometric authentication gate
//! - `audit`: Audit logging of additions and deletions
//! - `navigation`: Screen transitions requested by the core
//! - `display` / `cli`: The command-line front-end
//!
//! # Example
//!
//! ```rust,ignore
//! use billetera::cli::unlock;
//! use billetera::config::{BilleteraPaths, Settings};
//! use billetera::services::LedgerService;
//! use billetera::storage::ExpenseRepository;
//!
//! let paths = BilleteraPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let grant = unlock(&settings, true)?;
//! let (ledger, notice) = LedgerService::open(ExpenseRepository::from_paths(&paths), &grant);
//! ```

pub mod audit;
pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BilleteraError, BilleteraResult};
