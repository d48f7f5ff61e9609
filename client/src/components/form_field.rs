//! Labelled text input with an inline validation message.

use leptos::prelude::*;

/// One row of an auth form: label, input, and the field's error (if any).
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    error: Signal<Option<String>>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] hint: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id>
                {label}
                {hint.map(|h| view! { " " <span class="form-field__hint">{h}</span> })}
            </label>
            <input
                id=id
                class="form-field__input"
                class:form-field__input--invalid=move || error.get().is_some()
                type=input_type.unwrap_or("text")
                placeholder=placeholder.unwrap_or_default()
                autocomplete=autocomplete.unwrap_or("off")
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
