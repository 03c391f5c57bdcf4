//! Startup errors for the host server.

use crate::config::ConfigError;

/// Anything that stops the server from coming up.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `HOST` / `PORT` could not be parsed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Leptos options could not be loaded from `[package.metadata.leptos]` or
    /// the `LEPTOS_*` environment.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving the socket failed.
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
