use super::*;

fn user(display_name: &str) -> CurrentUser {
    CurrentUser { id: "@u:example.org".to_owned(), display_name: display_name.to_owned(), avatar_url: None }
}

#[test]
fn demo_user_is_alice() {
    let u = demo_user();
    assert_eq!(u.id, "@alice:matrix.org");
    assert_eq!(u.display_name, "Alice Wonder");
    assert!(u.avatar_url.is_none());
}

#[test]
fn initials_take_first_letter_of_each_word() {
    assert_eq!(demo_user().initials(), "AW");
    assert_eq!(user("Bob").initials(), "B");
    assert_eq!(user("Ada King Lovelace").initials(), "AKL");
}

#[test]
fn initials_ignore_extra_whitespace() {
    assert_eq!(user("  Alice   Wonder ").initials(), "AW");
    assert_eq!(user("").initials(), "");
}

#[test]
fn initials_handle_non_ascii() {
    assert_eq!(user("Émile Zola").initials(), "ÉZ");
}
