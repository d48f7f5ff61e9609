//! Floating light/dark theme switch rendered on every route.

use leptos::prelude::*;

use crate::components::icons::{Icon, render_icon};
use crate::state::ui::UiState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = crate::util::theme::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button class="theme-toggle" on:click=on_click title="Toggle theme">
            {move || if ui.get().dark_mode { render_icon(Icon::Sun).into_any() } else { render_icon(Icon::Moon).into_any() }}
        </button>
    }
}
