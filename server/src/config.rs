//! Host configuration from environment variables.
//!
//! `.env` is loaded by `main` before this runs. Leptos site options are read
//! separately from `[workspace.metadata.leptos]`.

use crate::error::ServerError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Gzip responses.
    pub compression: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT, compression: true }
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `SERVE_COMPRESSION` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] if `PORT` or `SERVE_COMPRESSION`
    /// is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_owned();
        }

        if let Some(raw) = lookup("PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidEnv { key: "PORT", value: raw.clone() })?;
        }

        if let Some(raw) = lookup("SERVE_COMPRESSION") {
            config.compression =
                parse_bool(&raw).ok_or(ServerError::InvalidEnv { key: "SERVE_COMPRESSION", value: raw })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
