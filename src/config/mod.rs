//! Configuration module for Billetera
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BilleteraPaths;
pub use settings::Settings;
