//! Authentication for CLI commands
//!
//! Every ledger command passes through the gate first. A terminal has no
//! biometric service, so `--skip-auth` is the usual way in.

use tracing::debug;

use crate::auth::{AccessGrant, AuthGate, AuthOutcome, BiometricCapability, UnavailableCapability};
use crate::config::Settings;
use crate::error::{BilleteraError, BilleteraResult};
use crate::navigation::TracingNavigator;
use crate::services::Notice;

/// Resolve the gate for this process
pub fn unlock(settings: &Settings, skip_auth: bool) -> BilleteraResult<AccessGrant> {
    unlock_with(UnavailableCapability, settings, skip_auth)
}

/// Resolve the gate against a specific capability
///
/// Notices are written to stderr. With `skip_auth` the skip is requested and
/// confirmed in one go.
pub fn unlock_with<C: BiometricCapability>(
    capability: C,
    settings: &Settings,
    skip_auth: bool,
) -> BilleteraResult<AccessGrant> {
    let mut gate = AuthGate::new(
        capability,
        TracingNavigator,
        settings.biometric_prompt.clone(),
    );

    if !gate.check_capability() && !skip_auth {
        eprintln!("{}", Notice::biometrics_unavailable());
    }

    if skip_auth {
        debug!("skipping authentication");
        let request = gate.request_skip();
        return Ok(gate.confirm_skip(request));
    }

    let outcome = gate.authenticate();
    if let Some(notice) = Notice::for_outcome(outcome) {
        eprintln!("{}", notice);
    }

    match outcome {
        AuthOutcome::Granted => gate.require_grant(),
        AuthOutcome::NotEnrolled => Err(BilleteraError::NotEnrolled),
        AuthOutcome::Failed => Err(BilleteraError::AuthenticationFailed(
            "use --skip-auth to continue without biometrics".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AccessKind, AuthPrompt, AuthResponse};

    struct FixedCapability {
        hardware: bool,
        enrolled: bool,
        accept: bool,
    }

    impl BiometricCapability for FixedCapability {
        fn has_hardware(&self) -> BilleteraResult<bool> {
            Ok(self.hardware)
        }

        fn is_enrolled(&self) -> BilleteraResult<bool> {
            Ok(self.enrolled)
        }

        fn authenticate(&mut self, _prompt: &AuthPrompt) -> BilleteraResult<AuthResponse> {
            Ok(if self.accept {
                AuthResponse::success()
            } else {
                AuthResponse::failure()
            })
        }
    }

    #[test]
    fn test_skip_always_grants() {
        let grant = unlock(&Settings::default(), true).unwrap();
        assert_eq!(grant.kind(), AccessKind::Skipped);
    }

    #[test]
    fn test_without_hardware_access_is_refused() {
        let err = unlock(&Settings::default(), false).unwrap_err();
        assert!(matches!(err, BilleteraError::AuthenticationFailed(_)));
        assert!(err.to_string().contains("--skip-auth"));
    }

    #[test]
    fn test_successful_biometric() {
        let capability = FixedCapability {
            hardware: true,
            enrolled: true,
            accept: true,
        };
        let grant = unlock_with(capability, &Settings::default(), false).unwrap();
        assert_eq!(grant.kind(), AccessKind::Biometric);
    }

    #[test]
    fn test_not_enrolled() {
        let capability = FixedCapability {
            hardware: true,
            enrolled: false,
            accept: true,
        };
        let err = unlock_with(capability, &Settings::default(), false).unwrap_err();
        assert!(matches!(err, BilleteraError::NotEnrolled));
    }
}
