//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation-only concerns (theme) apart from screen models
//! (`auth_form`, `rooms`).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by every route.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
