//! Inline SVG icons used by the rail, room list, and auth card.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;

use crate::state::rooms::RoomKind;

/// Icons available to rail and list buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    MessageCircle,
    Users,
    Globe,
    Settings,
    Plus,
    Search,
    Hash,
    AtSign,
    LogOut,
    Sun,
    Moon,
    Spinner,
}

impl From<RoomKind> for Icon {
    fn from(kind: RoomKind) -> Self {
        match kind {
            RoomKind::Channel => Self::Hash,
            RoomKind::DirectMessage => Self::AtSign,
            RoomKind::Space => Self::Globe,
        }
    }
}

/// Render `icon` as a 20x20 stroke SVG.
pub fn render_icon(icon: Icon) -> impl IntoView {
    match icon {
        Icon::MessageCircle => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M17 9.5 C17 13.4 13.9 16.5 10 16.5 C8.9 16.5 7.9 16.3 7 15.8 L3 17 L4.2 13.3 C3.4 12.2 3 10.9 3 9.5 C3 5.6 6.1 2.5 10 2.5 C13.9 2.5 17 5.6 17 9.5 Z" />
            </svg>
        }
        .into_any(),
        Icon::Users => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="7.5" cy="6.5" r="3" />
                <path d="M2 17 C2 13.7 4.5 11.5 7.5 11.5 C10.5 11.5 13 13.7 13 17" />
                <path d="M13 3.8 C14.4 4.2 15.4 5.4 15.4 6.8 C15.4 8.2 14.4 9.4 13 9.8" />
                <path d="M15 11.9 C16.8 12.6 18 14.5 18 17" />
            </svg>
        }
        .into_any(),
        Icon::Globe => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="7.5" />
                <line x1="2.5" y1="10" x2="17.5" y2="10" />
                <path d="M10 2.5 C12.2 4.6 13.3 7.2 13.3 10 C13.3 12.8 12.2 15.4 10 17.5 C7.8 15.4 6.7 12.8 6.7 10 C6.7 7.2 7.8 4.6 10 2.5 Z" />
            </svg>
        }
        .into_any(),
        Icon::Settings => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="2.5" />
                <path d="M10 2 V4 M10 16 V18 M2 10 H4 M16 10 H18 M4.3 4.3 L5.7 5.7 M14.3 14.3 L15.7 15.7 M4.3 15.7 L5.7 14.3 M14.3 5.7 L15.7 4.3" />
            </svg>
        }
        .into_any(),
        Icon::Plus => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <line x1="10" y1="4" x2="10" y2="16" />
                <line x1="4" y1="10" x2="16" y2="10" />
            </svg>
        }
        .into_any(),
        Icon::Search => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="8.5" cy="8.5" r="5.5" />
                <line x1="12.5" y1="12.5" x2="17" y2="17" />
            </svg>
        }
        .into_any(),
        Icon::Hash => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <line x1="4" y1="7.5" x2="16" y2="7.5" />
                <line x1="4" y1="12.5" x2="16" y2="12.5" />
                <line x1="8.5" y1="3" x2="7" y2="17" />
                <line x1="13" y1="3" x2="11.5" y2="17" />
            </svg>
        }
        .into_any(),
        Icon::AtSign => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="3" />
                <path d="M13 7 V11 C13 12.4 13.9 13.2 15 13.2 C16.4 13.2 17 11.8 17 10 C17 6.1 13.9 3 10 3 C6.1 3 3 6.1 3 10 C3 13.9 6.1 17 10 17 C11.5 17 12.9 16.5 14 15.8" />
            </svg>
        }
        .into_any(),
        Icon::LogOut => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M8 17 H4 C3.4 17 3 16.6 3 16 V4 C3 3.4 3.4 3 4 3 H8" />
                <polyline points="13,14 17,10 13,6" />
                <line x1="17" y1="10" x2="7" y2="10" />
            </svg>
        }
        .into_any(),
        Icon::Sun => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="3.5" />
                <path d="M10 1.5 V3.5 M10 16.5 V18.5 M1.5 10 H3.5 M16.5 10 H18.5 M4 4 L5.4 5.4 M14.6 14.6 L16 16 M4 16 L5.4 14.6 M14.6 5.4 L16 4" />
            </svg>
        }
        .into_any(),
        Icon::Moon => view! {
            <svg class="icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M16.5 12.2 C15.6 12.6 14.6 12.8 13.5 12.8 C9.6 12.8 6.5 9.7 6.5 5.8 C6.5 4.7 6.8 3.6 7.2 2.7 C4.4 3.9 2.5 6.7 2.5 9.9 C2.5 14.2 6 17.6 10.2 17.6 C13.1 17.6 15.6 15.9 16.5 12.2 Z" />
            </svg>
        }
        .into_any(),
        Icon::Spinner => view! {
            <svg class="icon icon--spin" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2.5 A7.5 7.5 0 1 1 2.5 10" />
            </svg>
        }
        .into_any(),
    }
}
