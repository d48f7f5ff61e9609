use super::*;

#[test]
fn input_ids_are_unique() {
    let fields = [Field::Identifier, Field::DisplayName, Field::Password, Field::ConfirmPassword];
    let mut ids: Vec<_> = MODES
        .iter()
        .flat_map(|&m| fields.iter().map(move |&f| input_id(m, f)))
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn input_ids_match_form_prefixes() {
    assert_eq!(input_id(AuthMode::Login, Field::Identifier), "login-username");
    assert_eq!(input_id(AuthMode::Register, Field::ConfirmPassword), "reg-confirm");
}

#[test]
fn tabs_list_login_first() {
    assert_eq!(MODES, [AuthMode::Login, AuthMode::Register]);
}

#[test]
fn bind_routes_input_and_errors_through_form_state() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(AuthFormState::default());
        let (value, on_input, error) = bind(form, Field::Password);

        on_input.run("123".to_owned());
        assert_eq!(value.get_untracked(), "123");
        assert_eq!(error.get_untracked(), None);

        assert_eq!(form.try_update(AuthFormState::submit), Some(Err(SubmitRejected::Invalid)));
        assert_eq!(error.get_untracked().as_deref(), Some("Password must be at least 6 characters"));

        on_input.run("123456".to_owned());
        assert_eq!(error.get_untracked(), None);
    });
}

#[test]
fn repeated_tab_click_keeps_typed_values() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(AuthFormState::default());
        let (value, on_input, _) = bind(form, Field::Identifier);
        on_input.run("alice".to_owned());

        form.update(|f| f.switch_mode(AuthMode::Login));
        assert_eq!(value.get_untracked(), "alice");
    });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn run_submission_clears_loading_without_browser() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(AuthFormState::default());
        form.update(|f| {
            f.set_field(Field::Identifier, "alice".to_owned());
            f.set_field(Field::Password, "hunter22".to_owned());
        });
        let request = form.try_update(AuthFormState::submit).unwrap().unwrap();
        assert!(form.get_untracked().loading);

        run_submission(form, request);
        assert!(!form.get_untracked().loading);
    });
}
