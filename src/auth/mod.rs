//! Authentication gate
//!
//! A thin layer over the device biometric capability. The gate decides when
//! the ledger may be opened; it keeps no credentials and has no lockout.

pub mod capability;
pub mod gate;

pub use capability::{AuthPrompt, AuthResponse, BiometricCapability, UnavailableCapability};
pub use gate::{AccessGrant, AccessKind, AuthGate, AuthOutcome, GateState, SkipRequest};
