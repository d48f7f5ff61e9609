//! Signed-in user identity shown in the icon rail.
//!
//! SYSTEM CONTEXT
//! ==============
//! No identity provider is wired up; the home screen renders [`demo_user`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// The user the home screen is rendered for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Matrix ID, e.g. `@alice:matrix.org`.
    pub id: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl CurrentUser {
    /// Avatar fallback text: the first character of each word of the display
    /// name, e.g. `Alice Wonder` -> `AW`.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

pub fn demo_user() -> CurrentUser {
    CurrentUser {
        id: "@alice:matrix.org".to_owned(),
        display_name: "Alice Wonder".to_owned(),
        avatar_url: None,
    }
}
