//! Biometric capability collaborator
//!
//! The platform service is consumed as a decision oracle: it reports whether
//! hardware exists, whether anything is enrolled, and the result of a prompt.

use serde::{Deserialize, Serialize};

use crate::error::BilleteraResult;

/// Text shown by the platform prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPrompt {
    /// Message displayed while prompting
    pub message: String,
    /// Label of the cancel button
    pub cancel_label: String,
    /// Label of the device-credential fallback button
    pub fallback_label: String,
}

impl Default for AuthPrompt {
    fn default() -> Self {
        Self {
            message: "Authenticate to open your wallet".to_string(),
            cancel_label: "Cancel".to_string(),
            fallback_label: "Use device passcode".to_string(),
        }
    }
}

/// Result of a platform prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthResponse {
    pub success: bool,
}

impl AuthResponse {
    pub fn success() -> Self {
        Self { success: true }
    }

    pub fn failure() -> Self {
        Self { success: false }
    }
}

/// Platform biometric service
pub trait BiometricCapability {
    /// Whether the device has biometric hardware
    fn has_hardware(&self) -> BilleteraResult<bool>;

    /// Whether any biometric is enrolled
    fn is_enrolled(&self) -> BilleteraResult<bool>;

    /// Prompt the user; returns when the platform does
    fn authenticate(&mut self, prompt: &AuthPrompt) -> BilleteraResult<AuthResponse>;
}

/// Capability for hosts with no biometric service
///
/// Reports no hardware and declines every prompt, leaving skip as the way in.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableCapability;

impl BiometricCapability for UnavailableCapability {
    fn has_hardware(&self) -> BilleteraResult<bool> {
        Ok(false)
    }

    fn is_enrolled(&self) -> BilleteraResult<bool> {
        Ok(false)
    }

    fn authenticate(&mut self, _prompt: &AuthPrompt) -> BilleteraResult<AuthResponse> {
        Ok(AuthResponse::failure())
    }
}

impl<C: BiometricCapability + ?Sized> BiometricCapability for Box<C> {
    fn has_hardware(&self) -> BilleteraResult<bool> {
        (**self).has_hardware()
    }

    fn is_enrolled(&self) -> BilleteraResult<bool> {
        (**self).is_enrolled()
    }

    fn authenticate(&mut self, prompt: &AuthPrompt) -> BilleteraResult<AuthResponse> {
        (**self).authenticate(prompt)
    }
}
