//! Session-marker state for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend sets the `ppet_token` cookie after a successful Google login.
//! The UI never inspects it; a non-empty value is the only signal that the
//! visitor is logged in. Validation belongs to the backend.
//!
//! DESIGN
//! ======
//! `SessionCheck` derives `LandingState` once per page instance. Later calls
//! to `mount` return the cached state without touching the cookie store, so
//! re-renders cannot re-run the check or move the state back.

use crate::util::cookies::CookieStore;

/// Cookie set by the backend once the OAuth callback succeeds.
pub const SESSION_COOKIE: &str = "ppet_token";

/// What the landing page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LandingState {
    #[default]
    Anonymous,
    Welcomed,
}

impl LandingState {
    /// Derive the state from the marker value; empty counts as absent.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(value) if !value.is_empty() => Self::Welcomed,
            _ => Self::Anonymous,
        }
    }

    pub fn is_logged_in(self) -> bool {
        self == Self::Welcomed
    }

    pub fn offers_sign_in(self) -> bool {
        !self.is_logged_in()
    }
}

/// One-shot mount-time check of the session marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionCheck {
    state: LandingState,
    checked: bool,
}

impl SessionCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the marker from `store` on the first call only.
    pub fn mount<S: CookieStore + ?Sized>(&mut self, store: &S) -> LandingState {
        if self.checked {
            return self.state;
        }
        self.checked = true;
        let marker = store.read(SESSION_COOKIE);
        if LandingState::from_marker(marker.as_deref()).is_logged_in() {
            self.state = LandingState::Welcomed;
        }
        self.state
    }

    pub fn state(&self) -> LandingState {
        self.state
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
