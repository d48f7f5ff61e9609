use super::*;

#[test]
fn parse_stored_accepts_known_values() {
    assert_eq!(parse_stored("dark"), Some(true));
    assert_eq!(parse_stored("light"), Some(false));
    assert_eq!(parse_stored(" dark\n"), Some(true));
}

#[test]
fn parse_stored_rejects_unknown_values() {
    assert_eq!(parse_stored(""), None);
    assert_eq!(parse_stored("system"), None);
    assert_eq!(parse_stored("true"), None);
}

#[test]
fn stored_value_round_trips_through_parse() {
    for dark in [true, false] {
        assert_eq!(parse_stored(stored_value(dark)), Some(dark));
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_light_without_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn apply_is_callable_without_browser() {
    apply(false);
    apply(true);
}
