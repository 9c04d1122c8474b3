// External collaborators consumed by the shell
//
// The identity provider, the theme provider and the router live outside this
// crate. The shell only sees them through these traits. In-memory
// implementations back the headless binary and the tests.

use crate::models::{SessionState, User};
use std::sync::{Mutex, PoisonError, RwLock};

/// Identity/session provider.
pub trait SessionSource: Send + Sync {
    /// Current session snapshot
    fn session(&self) -> SessionState;

    fn logout(&self);
}

/// Theme provider. Read for styling only; never consulted by guard or layout.
pub trait ThemeSource: Send + Sync {
    fn is_dark(&self) -> bool;

    fn toggle_theme(&self);
}

/// Options for a router navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing
    pub replace: bool,
}

impl NavigateOptions {
    pub fn push() -> Self {
        Self { replace: false }
    }

    pub fn replace() -> Self {
        Self { replace: true }
    }
}

/// Router navigation action.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str, options: NavigateOptions);
}

/// Session source held in memory.
#[derive(Debug, Default)]
pub struct InMemorySession {
    state: RwLock<SessionState>,
}

impl InMemorySession {
    pub fn new(state: SessionState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    pub fn set(&self, state: SessionState) {
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = state;
    }

    pub fn sign_in(&self, user: User) {
        self.set(SessionState::signed_in(user));
    }

    pub fn begin_loading(&self) {
        self.set(SessionState::loading());
    }
}

impl SessionSource for InMemorySession {
    fn session(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn logout(&self) {
        tracing::info!("Session ended");
        self.set(SessionState::anonymous());
    }
}

/// Theme flag held in memory. Dark by default, like the client.
#[derive(Debug)]
pub struct InMemoryTheme {
    dark: RwLock<bool>,
}

impl InMemoryTheme {
    pub fn new(dark: bool) -> Self {
        Self {
            dark: RwLock::new(dark),
        }
    }
}

impl Default for InMemoryTheme {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ThemeSource for InMemoryTheme {
    fn is_dark(&self) -> bool {
        *self.dark.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn toggle_theme(&self) {
        let mut dark = self.dark.write().unwrap_or_else(PoisonError::into_inner);
        *dark = !*dark;
    }
}

/// Navigator that records every call instead of driving a real router.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<(String, NavigateOptions)>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<(String, NavigateOptions)> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<(String, NavigateOptions)> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str, options: NavigateOptions) {
        tracing::debug!(path, replace = options.replace, "Router navigate");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_string(), options));
    }
}
