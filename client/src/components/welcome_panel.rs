//! Main-area placeholder shown while no conversation view exists.

use leptos::prelude::*;

use crate::components::icons::{Icon, render_icon};

#[component]
pub fn WelcomePanel() -> impl IntoView {
    view! {
        <main class="welcome-panel">
            <div class="welcome-panel__inner">
                <div class="welcome-panel__badge">{render_icon(Icon::MessageCircle)}</div>
                <h1 class="welcome-panel__title">"Welcome to Orizu"</h1>
                <p class="welcome-panel__copy">
                    "Select a room from the sidebar or start a new conversation to begin chatting securely on Matrix."
                </p>
            </div>
        </main>
    }
}
