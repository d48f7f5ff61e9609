//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render screen chrome and form controls while reading/writing
//! shared state from Leptos context providers.

pub mod form_field;
pub mod icon_rail;
pub mod icons;
pub mod room_list;
pub mod theme_toggle;
pub mod welcome_panel;
