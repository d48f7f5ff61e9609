//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` is the only outbound seam and is currently a mock: it logs and
//! waits instead of contacting a homeserver.

pub mod auth;
