//! Gate state machine
//!
//! `Unchecked → Checking → {Granted, DeclinedWithFallback, Skipped}`. All
//! three terminal states open the ledger. A failed prompt returns the gate to
//! `Unchecked` so the user can retry; there is no attempt counter.

use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{debug, info, warn};

use crate::error::{BilleteraError, BilleteraResult};
use crate::navigation::{Navigator, Screen};

use super::capability::{AuthPrompt, BiometricCapability};

/// Where the gate currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No attempt in progress
    Unchecked,
    /// Waiting on the platform
    Checking,
    /// Biometric check passed
    Granted,
    /// Nothing enrolled and the user chose to continue anyway
    DeclinedWithFallback,
    /// The user skipped authentication
    Skipped,
}

impl GateState {
    /// Whether this state opens the ledger
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Granted | Self::DeclinedWithFallback | Self::Skipped
        )
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchecked => write!(f, "Unchecked"),
            Self::Checking => write!(f, "Checking"),
            Self::Granted => write!(f, "Granted"),
            Self::DeclinedWithFallback => write!(f, "DeclinedWithFallback"),
            Self::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Result of one [`AuthGate::authenticate`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Access granted
    Granted,
    /// Prompt declined or errored; retry is allowed
    Failed,
    /// Hardware present but nothing enrolled; the caller may continue
    /// without biometrics or cancel
    NotEnrolled,
}

/// How access was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Biometric,
    DeclinedWithFallback,
    Skipped,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Biometric => write!(f, "biometric"),
            Self::DeclinedWithFallback => write!(f, "declined-with-fallback"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Proof that the gate resolved; required to open the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    kind: AccessKind,
    granted_at: DateTime<Utc>,
}

impl AccessGrant {
    fn new(kind: AccessKind) -> Self {
        Self {
            kind,
            granted_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> AccessKind {
        self.kind
    }

    pub fn granted_at(&self) -> DateTime<Utc> {
        self.granted_at
    }
}

/// Pending skip confirmation; dropping it cancels the skip
#[derive(Debug)]
#[must_use = "a skip only takes effect once confirmed"]
pub struct SkipRequest {
    _private: (),
}

/// The authentication gate
pub struct AuthGate<C, N> {
    capability: C,
    navigator: N,
    prompt: AuthPrompt,
    state: GateState,
    supported: Option<bool>,
    fallback_offered: bool,
    grant: Option<AccessGrant>,
}

impl<C: BiometricCapability, N: Navigator> AuthGate<C, N> {
    /// Create a gate in the `Unchecked` state
    pub fn new(capability: C, navigator: N, prompt: AuthPrompt) -> Self {
        Self {
            capability,
            navigator,
            prompt,
            state: GateState::Unchecked,
            supported: None,
            fallback_offered: false,
            grant: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether a platform call is in flight
    pub fn is_pending(&self) -> bool {
        self.state == GateState::Checking
    }

    /// Whether the gate reached a terminal state
    pub fn is_resolved(&self) -> bool {
        self.state.is_terminal()
    }

    /// Cached result of the last capability check
    pub fn is_supported(&self) -> Option<bool> {
        self.supported
    }

    /// Whether a "continue without biometrics" choice is on offer
    pub fn fallback_offered(&self) -> bool {
        self.fallback_offered
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Probe for biometric hardware
    ///
    /// Never fails the flow: a capability error counts as unsupported, and
    /// skip stays available either way.
    pub fn check_capability(&mut self) -> bool {
        let supported = match self.capability.has_hardware() {
            Ok(supported) => supported,
            Err(e) => {
                warn!(error = %e, "biometric capability check failed");
                false
            }
        };
        debug!(supported, "biometric capability checked");
        self.supported = Some(supported);
        supported
    }

    /// Run the biometric check
    pub fn authenticate(&mut self) -> AuthOutcome {
        if self.is_resolved() {
            debug!(state = %self.state, "gate already resolved");
            return AuthOutcome::Granted;
        }

        self.state = GateState::Checking;
        self.fallback_offered = false;

        let supported = match self.supported {
            Some(supported) => supported,
            None => self.check_capability(),
        };

        let enrolled = match self.capability.is_enrolled() {
            Ok(enrolled) => enrolled,
            Err(e) => return self.fail(&e),
        };

        if supported && !enrolled {
            info!("no biometrics enrolled; offering to continue without them");
            self.state = GateState::Unchecked;
            self.fallback_offered = true;
            return AuthOutcome::NotEnrolled;
        }

        match self.capability.authenticate(&self.prompt) {
            Ok(response) if response.success => {
                self.resolve(AccessKind::Biometric);
                AuthOutcome::Granted
            }
            Ok(_) => {
                info!("biometric authentication declined");
                self.state = GateState::Unchecked;
                AuthOutcome::Failed
            }
            Err(e) => self.fail(&e),
        }
    }

    /// Accept the offer made after [`AuthOutcome::NotEnrolled`]
    pub fn continue_without_biometrics(&mut self) -> BilleteraResult<AccessGrant> {
        if !self.fallback_offered {
            return Err(BilleteraError::AccessDenied(
                "continuing without biometrics is only offered when none are enrolled".into(),
            ));
        }
        Ok(self.resolve(AccessKind::DeclinedWithFallback))
    }

    /// Decline the offer made after [`AuthOutcome::NotEnrolled`]
    pub fn cancel_fallback(&mut self) {
        self.fallback_offered = false;
    }

    /// Begin a skip; it must be confirmed
    pub fn request_skip(&self) -> SkipRequest {
        SkipRequest { _private: () }
    }

    /// Confirm a skip; always succeeds
    pub fn confirm_skip(&mut self, _request: SkipRequest) -> AccessGrant {
        if let Some(grant) = &self.grant {
            return grant.clone();
        }
        self.resolve(AccessKind::Skipped)
    }

    /// The grant, once the gate is resolved
    pub fn grant(&self) -> Option<AccessGrant> {
        self.grant.clone()
    }

    /// Like [`grant`](Self::grant) but as an error for unresolved gates
    pub fn require_grant(&self) -> BilleteraResult<AccessGrant> {
        self.grant().ok_or_else(|| {
            BilleteraError::AccessDenied(format!("authentication gate is {}", self.state))
        })
    }

    /// Return to the login screen and forget the grant
    pub fn logout(&mut self) {
        info!("logged out");
        self.state = GateState::Unchecked;
        self.fallback_offered = false;
        self.grant = None;
        self.navigator.go_to(Screen::Login);
    }

    fn fail(&mut self, error: &BilleteraError) -> AuthOutcome {
        warn!(error = %error, "biometric authentication errored");
        self.state = GateState::Unchecked;
        AuthOutcome::Failed
    }

    fn resolve(&mut self, kind: AccessKind) -> AccessGrant {
        self.state = match kind {
            AccessKind::Biometric => GateState::Granted,
            AccessKind::DeclinedWithFallback => GateState::DeclinedWithFallback,
            AccessKind::Skipped => GateState::Skipped,
        };
        self.fallback_offered = false;

        let grant = AccessGrant::new(kind);
        self.grant = Some(grant.clone());
        info!(access = %kind, "access granted");
        self.navigator.go_to(Screen::Home);
        grant
    }
}
