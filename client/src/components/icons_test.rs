use super::*;

#[test]
fn room_kind_selects_row_icon() {
    assert_eq!(Icon::from(RoomKind::Channel), Icon::Hash);
    assert_eq!(Icon::from(RoomKind::DirectMessage), Icon::AtSign);
    assert_eq!(Icon::from(RoomKind::Space), Icon::Globe);
}
