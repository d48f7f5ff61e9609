//! Mock auth transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stands in for a homeserver login/register call. A validated
//! [`AuthRequest`] is logged and the call resolves after a fixed delay
//! with no result; the caller then leaves its loading state.
//!
//! Client-side (hydrate): waits on `gloo-timers`.
//! Server-side (SSR) and native tests: resolves immediately.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth_form::{AuthMode, AuthRequest};

/// Simulated round-trip latency for a form submission.
pub const SUBMIT_DELAY_MS: u64 = 2000;

/// Log prefix for an attempt of the given kind.
pub fn attempt_label(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Login attempt",
        AuthMode::Register => "Register attempt",
    }
}

/// One-line summary of an attempt. Carries the identifier only.
pub fn attempt_line(request: &AuthRequest) -> String {
    format!("{}: identifier={}", attempt_label(request.mode()), request.identifier())
}

/// Log `request` at `info`, with the redacted `Debug` form at `debug`.
pub fn log_attempt(request: &AuthRequest) {
    log::info!("{}", attempt_line(request));
    log::debug!("{request:?}");
}

/// Pretend to send `request` upstream.
pub async fn simulate_submit(request: &AuthRequest) {
    log_attempt(request);

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(std::time::Duration::from_millis(SUBMIT_DELAY_MS)).await;
    }
}
