//! Startup and serve errors for the host binary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
