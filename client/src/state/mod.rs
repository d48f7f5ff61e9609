//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`auth_form`, `rooms`, `session`) plus shared
//! chrome (`ui`) so components depend on small focused models.

pub mod auth_form;
pub mod rooms;
pub mod session;
pub mod ui;
