//! Room summaries for the home screen's room list.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no chat backend yet. The list is the fixed demo set returned by
//! [`demo_rooms`], and selection/search live only in [`HomeState`] for the
//! lifetime of the page.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use serde::{Deserialize, Serialize};

/// Unread counts above this render as `"99+"`.
pub const MAX_BADGE_COUNT: u32 = 99;

/// Room selected when the home screen first renders.
pub const INITIAL_SELECTED_ROOM_ID: &str = "3";

/// Room category; decides the row icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Channel,
    #[serde(rename = "dm")]
    DirectMessage,
    Space,
}

impl RoomKind {
    /// Short glyph used as the icon's accessible label.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Channel => "#",
            Self::DirectMessage => "@",
            Self::Space => "\u{1F310}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Channel => "Channel",
            Self::DirectMessage => "Direct message",
            Self::Space => "Space",
        }
    }
}

/// A room as shown in the sidebar list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RoomKind,
    pub unread: u32,
}

impl RoomSummary {
    fn new(id: &str, name: &str, kind: RoomKind, unread: u32) -> Self {
        Self { id: id.to_owned(), name: name.to_owned(), kind, unread }
    }
}

/// The fixed room list rendered by the prototype.
pub fn demo_rooms() -> Vec<RoomSummary> {
    vec![
        RoomSummary::new("1", "#general", RoomKind::Channel, 5),
        RoomSummary::new("2", "#random", RoomKind::Channel, 0),
        RoomSummary::new("3", "@bob:matrix.org", RoomKind::DirectMessage, 12),
        RoomSummary::new("4", "Design Team", RoomKind::Space, 0),
        RoomSummary::new("5", "#ui-ux", RoomKind::Channel, 2),
    ]
}

/// Badge text for an unread count: nothing for zero, capped at `"99+"`.
pub fn unread_badge(unread: u32) -> Option<String> {
    match unread {
        0 => None,
        n if n > MAX_BADGE_COUNT => Some(format!("{MAX_BADGE_COUNT}+")),
        n => Some(n.to_string()),
    }
}

/// Rooms whose name contains `query` (trimmed, case-insensitive).
pub fn filter_rooms<'a>(rooms: &'a [RoomSummary], query: &str) -> Vec<&'a RoomSummary> {
    let needle = query.trim().to_lowercase();
    rooms
        .iter()
        .filter(|room| needle.is_empty() || room.name.to_lowercase().contains(&needle))
        .collect()
}

/// Session-local home screen state.
#[derive(Clone, Debug)]
pub struct HomeState {
    pub rooms: Vec<RoomSummary>,
    pub selected_room_id: Option<String>,
    pub room_query: String,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            rooms: demo_rooms(),
            selected_room_id: Some(INITIAL_SELECTED_ROOM_ID.to_owned()),
            room_query: String::new(),
        }
    }
}

impl HomeState {
    pub fn is_selected(&self, room_id: &str) -> bool {
        self.selected_room_id.as_deref() == Some(room_id)
    }

    /// Select `room_id` if it names a known room.
    pub fn select(&mut self, room_id: &str) {
        if self.rooms.iter().any(|r| r.id == room_id) {
            self.selected_room_id = Some(room_id.to_owned());
        }
    }

    pub fn visible_rooms(&self) -> Vec<RoomSummary> {
        filter_rooms(&self.rooms, &self.room_query).into_iter().cloned().collect()
    }
}
