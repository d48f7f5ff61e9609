use super::*;

// =============================================================
// unread_badge
// =============================================================

#[test]
fn unread_zero_has_no_badge() {
    assert_eq!(unread_badge(0), None);
}

#[test]
fn unread_up_to_99_renders_literal() {
    for n in [1, 2, 12, 50, 98, 99] {
        assert_eq!(unread_badge(n), Some(n.to_string()));
    }
}

#[test]
fn unread_above_99_is_capped() {
    for n in [100, 101, 999, u32::MAX] {
        assert_eq!(unread_badge(n).as_deref(), Some("99+"));
    }
}

// =============================================================
// RoomKind
// =============================================================

#[test]
fn room_kind_glyphs() {
    assert_eq!(RoomKind::Channel.glyph(), "#");
    assert_eq!(RoomKind::DirectMessage.glyph(), "@");
    assert_ne!(RoomKind::Space.glyph(), RoomKind::Channel.glyph());
}

#[test]
fn room_summary_uses_prototype_tags() {
    let room: RoomSummary =
        serde_json::from_str(r#"{"id":"3","name":"@bob:matrix.org","type":"dm","unread":12}"#).unwrap();
    assert_eq!(room.kind, RoomKind::DirectMessage);
    assert_eq!(serde_json::to_value(RoomKind::Space).unwrap(), serde_json::json!("space"));
    assert_eq!(serde_json::to_value(RoomKind::Channel).unwrap(), serde_json::json!("channel"));
}

// =============================================================
// demo data
// =============================================================

#[test]
fn demo_rooms_match_prototype() {
    let rooms = demo_rooms();
    let names: Vec<_> = rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["#general", "#random", "@bob:matrix.org", "Design Team", "#ui-ux"]);
    assert_eq!(rooms[2].kind, RoomKind::DirectMessage);
    assert_eq!(rooms[2].unread, 12);
    assert_eq!(rooms[3].kind, RoomKind::Space);
}

// =============================================================
// filter_rooms
// =============================================================

#[test]
fn filter_empty_query_keeps_everything() {
    let rooms = demo_rooms();
    assert_eq!(filter_rooms(&rooms, "").len(), rooms.len());
    assert_eq!(filter_rooms(&rooms, "   ").len(), rooms.len());
}

#[test]
fn filter_is_case_insensitive_substring() {
    let rooms = demo_rooms();
    let hits: Vec<_> = filter_rooms(&rooms, " DESIGN ").iter().map(|r| r.id.as_str()).collect();
    assert_eq!(hits, ["4"]);
    let hits: Vec<_> = filter_rooms(&rooms, "#").iter().map(|r| r.id.as_str()).collect();
    assert_eq!(hits, ["1", "2", "5"]);
}

#[test]
fn filter_no_match_is_empty() {
    assert!(filter_rooms(&demo_rooms(), "zzz").is_empty());
}

// =============================================================
// HomeState
// =============================================================

#[test]
fn home_state_default_selects_direct_message() {
    let state = HomeState::default();
    assert!(state.is_selected("3"));
    assert!(!state.is_selected("1"));
    assert!(state.room_query.is_empty());
}

#[test]
fn home_state_select_ignores_unknown_ids() {
    let mut state = HomeState::default();
    state.select("1");
    assert!(state.is_selected("1"));
    state.select("nope");
    assert!(state.is_selected("1"));
}

#[test]
fn home_state_visible_rooms_follow_query() {
    let mut state = HomeState::default();
    state.room_query = "random".to_owned();
    let visible = state.visible_rooms();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "2");
}
