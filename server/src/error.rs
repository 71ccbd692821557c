//! Startup error types.

use std::net::SocketAddr;

use leptos::config::errors::LeptosConfigError;

/// A listener setting from the environment could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    #[error("invalid HOST: {0:?}")]
    InvalidHost(String),
}

/// Anything that stops the server from starting or keeps it from serving.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` / `LEPTOS_*` settings missing or malformed.
    #[error("leptos configuration: {0}")]
    Leptos(#[from] LeptosConfigError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
