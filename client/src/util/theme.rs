//! Theme initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies the `.dark`
//! class to the `<html>` element. With no stored preference the system
//! `prefers-color-scheme` wins. Toggle writes back to `localStorage`.
//! Requires a browser environment; elsewhere it is a no-op that reports light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "orizu_theme";

const DARK_CLASS: &str = "dark";

/// Decode a stored preference. Unknown values are treated as unset.
pub fn parse_stored(raw: &str) -> Option<bool> {
    match raw.trim() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Encode a preference for storage.
pub fn stored_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Read the theme preference. `true` means dark.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(dark) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_stored) {
                return dark;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            if enabled {
                let _ = class_list.add_1(DARK_CLASS);
            } else {
                let _ = class_list.remove_1(DARK_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (enabled, DARK_CLASS);
    }
}

/// Toggle the theme and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, stored_value(next));
        }
    }
    log::debug!("theme set to {}", stored_value(next));
    next
}
