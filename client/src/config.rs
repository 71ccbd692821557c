//! Backend origin used to build redirect targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! The value is fixed when the crate is compiled (`GOCHI_BACKEND_URL`) so the
//! server-rendered HTML and the hydrated WASM agree on it. Components read it
//! from context; nothing mutates it at runtime.

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Path on the backend that starts the Google OAuth flow.
pub const GOOGLE_LOGIN_PATH: &str = "/auth/google/login";

/// Root URL of the authentication/API server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendBase(String);

impl BackendBase {
    /// Build from a raw origin, dropping any trailing `/`.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().trim_end_matches('/').to_owned())
    }

    /// Resolve the value baked in at compile time, or the local default.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("GOCHI_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/auth/google/login`
    pub fn google_login_url(&self) -> String {
        format!("{}{GOOGLE_LOGIN_PATH}", self.0)
    }
}

impl Default for BackendBase {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
