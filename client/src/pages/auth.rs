//! Auth screen: login/register card with inline validation and a mock submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state lives in one `RwSignal<AuthFormState>`. The page derives narrow
//! memos (`mode`, `loading`) so typing does not rebuild the active form.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::components::icons::{Icon, render_icon};
use crate::state::auth_form::{AuthFormState, AuthMode, AuthRequest, Field, SubmitRejected};

const MODES: [AuthMode; 2] = [AuthMode::Login, AuthMode::Register];

/// DOM id for a field's input, unique across both forms.
fn input_id(mode: AuthMode, field: Field) -> &'static str {
    match (mode, field) {
        (AuthMode::Login, Field::Identifier) => "login-username",
        (AuthMode::Login, Field::DisplayName) => "login-displayname",
        (AuthMode::Login, Field::Password) => "login-password",
        (AuthMode::Login, Field::ConfirmPassword) => "login-confirm",
        (AuthMode::Register, Field::Identifier) => "reg-username",
        (AuthMode::Register, Field::DisplayName) => "reg-displayname",
        (AuthMode::Register, Field::Password) => "reg-password",
        (AuthMode::Register, Field::ConfirmPassword) => "reg-confirm",
    }
}

/// Reactive value, input handler, and inline error for one field.
fn bind(form: RwSignal<AuthFormState>, field: Field) -> (Signal<String>, Callback<String>, Signal<Option<String>>) {
    let value = Signal::derive(move || form.with(|f| f.value(field).to_owned()));
    let on_input = Callback::new(move |v: String| form.update(|f| f.set_field(field, v)));
    let error = Signal::derive(move || form.with(|f| f.errors().message(field)));
    (value, on_input, error)
}

fn run_submission(form: RwSignal<AuthFormState>, request: AuthRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::auth::simulate_submit(&request).await;
        form.update(AuthFormState::finish_submit);
    });

    #[cfg(not(feature = "hydrate"))]
    {
        crate::net::auth::log_attempt(&request);
        form.update(AuthFormState::finish_submit);
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let form = RwSignal::new(AuthFormState::default());
    let mode = Memo::new(move |_| form.with(|f| f.mode));
    let loading = Memo::new(move |_| form.with(|f| f.loading));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.try_update(AuthFormState::submit) {
            Some(Ok(request)) => run_submission(form, request),
            Some(Err(SubmitRejected::Invalid)) => log::debug!("{} form has validation errors", mode.get_untracked().tab_label()),
            Some(Err(SubmitRejected::Busy)) | None => {}
        }
    };

    let tabs = MODES
        .into_iter()
        .map(|m| {
            let on_click = move |_| form.update(|f| f.switch_mode(m));
            view! {
                <button
                    type="button"
                    role="tab"
                    class="auth-tabs__tab"
                    class:auth-tabs__tab--active=move || mode.get() == m
                    aria-selected=move || if mode.get() == m { "true" } else { "false" }
                    on:click=on_click
                >
                    {m.tab_label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <header class="auth-card__header">
                    <div class="logo">
                        <span>"O"</span>
                    </div>
                    <h1 class="auth-card__title">"Orizu"</h1>
                    <p class="auth-card__subtitle">{move || mode.get().subtitle()}</p>
                </header>

                <div class="auth-tabs" role="tablist">{tabs}</div>

                <form class="auth-form" on:submit=on_submit>
                    {move || match mode.get() {
                        AuthMode::Login => view! { <LoginFields form=form/> }.into_any(),
                        AuthMode::Register => view! { <RegisterFields form=form/> }.into_any(),
                    }}
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || loading.get()>
                        <Show when=move || loading.get()>{render_icon(Icon::Spinner)}</Show>
                        {move || mode.get().submit_label(loading.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn LoginFields(form: RwSignal<AuthFormState>) -> impl IntoView {
    let (identifier, on_identifier, identifier_error) = bind(form, Field::Identifier);
    let (password, on_password, password_error) = bind(form, Field::Password);

    view! {
        <FormField
            id=input_id(AuthMode::Login, Field::Identifier)
            label="Matrix ID"
            placeholder="@user:homeserver.org"
            autocomplete="username"
            value=identifier
            on_input=on_identifier
            error=identifier_error
        />
        <FormField
            id=input_id(AuthMode::Login, Field::Password)
            label="Password"
            input_type="password"
            autocomplete="current-password"
            value=password
            on_input=on_password
            error=password_error
        />
    }
}

#[component]
fn RegisterFields(form: RwSignal<AuthFormState>) -> impl IntoView {
    let (identifier, on_identifier, identifier_error) = bind(form, Field::Identifier);
    let (display_name, on_display_name, display_name_error) = bind(form, Field::DisplayName);
    let (password, on_password, password_error) = bind(form, Field::Password);
    let (confirm, on_confirm, confirm_error) = bind(form, Field::ConfirmPassword);

    view! {
        <FormField
            id=input_id(AuthMode::Register, Field::Identifier)
            label="Username"
            placeholder="myusername"
            autocomplete="username"
            value=identifier
            on_input=on_identifier
            error=identifier_error
        />
        <FormField
            id=input_id(AuthMode::Register, Field::DisplayName)
            label="Display Name"
            hint="(optional)"
            placeholder="My Full Name"
            value=display_name
            on_input=on_display_name
            error=display_name_error
        />
        <FormField
            id=input_id(AuthMode::Register, Field::Password)
            label="Password"
            input_type="password"
            autocomplete="new-password"
            value=password
            on_input=on_password
            error=password_error
        />
        <FormField
            id=input_id(AuthMode::Register, Field::ConfirmPassword)
            label="Confirm Password"
            input_type="password"
            autocomplete="new-password"
            value=confirm
            on_input=on_confirm
            error=confirm_error
        />
    }
}
