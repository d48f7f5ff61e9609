use super::*;
use crate::state::auth_form::{LoginForm, RegisterForm};

#[test]
fn attempt_labels_name_the_mode() {
    assert_eq!(attempt_label(AuthMode::Login), "Login attempt");
    assert_eq!(attempt_label(AuthMode::Register), "Register attempt");
}

#[test]
fn submit_delay_is_two_seconds() {
    assert_eq!(SUBMIT_DELAY_MS, 2000);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn simulate_submit_resolves_without_browser_timer() {
    let form = LoginForm { identifier: "alice".to_owned(), password: "hunter22".to_owned() };
    let request = AuthRequest::Login(form.validate().unwrap());
    futures::executor::block_on(simulate_submit(&request));
}

#[test]
fn attempt_line_names_mode_and_identifier() {
    let form = LoginForm { identifier: "alice".to_owned(), password: "hunter22".to_owned() };
    let request = AuthRequest::Login(form.validate().unwrap());
    assert_eq!(attempt_line(&request), "Login attempt: identifier=alice");
}

#[test]
fn attempt_line_never_contains_passwords() {
    let form = RegisterForm {
        identifier: "bob".to_owned(),
        display_name: String::new(),
        password: "s3cret-pass".to_owned(),
        confirm_password: "s3cret-pass".to_owned(),
    };
    let request = AuthRequest::Register(form.validate().unwrap());
    let line = attempt_line(&request);
    assert!(line.starts_with("Register attempt"));
    assert!(!line.contains("s3cret-pass"));
}

#[test]
fn log_attempt_accepts_any_request() {
    let form = LoginForm { identifier: "@alice:matrix.org".to_owned(), password: "hunter22".to_owned() };
    log_attempt(&AuthRequest::Login(form.validate().unwrap()));
}
