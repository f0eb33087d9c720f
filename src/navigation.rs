//! Screen transitions
//!
//! Routing is owned by the host UI. The core only asks it to move to a
//! screen; no history is kept.

use std::fmt;

/// Screens the core can ask the host to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Authentication gate
    Login,
    /// Ledger view
    Home,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "Login"),
            Self::Home => write!(f, "Home"),
        }
    }
}

/// Fire-and-forget transition to another screen
pub trait Navigator {
    fn go_to(&mut self, screen: Screen);
}

/// Navigator for hosts without screens; transitions are only traced
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn go_to(&mut self, screen: Screen) {
        tracing::debug!(%screen, "navigate");
    }
}

/// Navigator that remembers every transition
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Vec<Screen>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screens visited, in order
    pub fn visited(&self) -> &[Screen] {
        &self.visited
    }

    /// Most recent screen
    pub fn current(&self) -> Option<Screen> {
        self.visited.last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&mut self, screen: Screen) {
        self.visited.push(screen);
    }
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn go_to(&mut self, screen: Screen) {
        (**self).go_to(screen);
    }
}
