//! Vertical icon rail: logo, primary navigation, settings, and the user avatar.
//!
//! DESIGN
//! ======
//! Navigation targets are not implemented yet; buttons only carry tooltips.
//! The avatar tooltip holds the identity summary and the log-out action.

#[cfg(test)]
#[path = "icon_rail_test.rs"]
mod icon_rail_test;

use leptos::prelude::*;

use crate::components::icons::{Icon, render_icon};
use crate::state::session::CurrentUser;

#[derive(Clone, Copy)]
struct NavDef {
    icon: Icon,
    label: &'static str,
}

const PRIMARY_NAV: &[NavDef] = &[
    NavDef { icon: Icon::MessageCircle, label: "Rooms" },
    NavDef { icon: Icon::Users, label: "People" },
    NavDef { icon: Icon::Globe, label: "Spaces" },
];

const SECONDARY_NAV: &[NavDef] = &[NavDef { icon: Icon::Settings, label: "Settings" }];

/// Route the log-out action returns to.
const LOGOUT_ROUTE: &str = "/auth";

fn render_group(items: &'static [NavDef]) -> impl IntoView {
    items
        .iter()
        .map(|nd| {
            view! {
                <button class="icon-rail__btn ui-tooltip" title=nd.label attr:data-tooltip=nd.label>
                    {render_icon(nd.icon)}
                </button>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn IconRail(user: CurrentUser) -> impl IntoView {
    view! {
        <aside class="icon-rail">
            <div class="logo logo--small">
                <span>"O"</span>
            </div>
            {render_group(PRIMARY_NAV)}
            <div class="icon-rail__separator"></div>
            {render_group(SECONDARY_NAV)}
            <div class="icon-rail__spacer"></div>
            <UserAvatar user=user/>
        </aside>
    }
}

/// Initials avatar with a hover card showing the identity and a log-out link.
#[component]
fn UserAvatar(user: CurrentUser) -> impl IntoView {
    let open = RwSignal::new(false);
    let initials = user.initials();
    let display_name = user.display_name;
    let title = display_name.clone();
    let matrix_id = user.id;

    view! {
        <div
            class="icon-rail__user"
            on:mouseenter=move |_| open.set(true)
            on:mouseleave=move |_| open.set(false)
        >
            <button class="avatar" on:click=move |_| open.update(|o| *o = !*o) title=title>
                <span class="avatar__fallback">{initials}</span>
            </button>
            <Show when=move || open.get()>
                <div class="icon-rail__user-card">
                    <p class="icon-rail__user-name">{display_name.clone()}</p>
                    <p class="icon-rail__user-id">{matrix_id.clone()}</p>
                    <a
                        class="btn btn--ghost icon-rail__logout"
                        href=LOGOUT_ROUTE
                        on:click=move |_| {
                            log::info!("log out requested");
                            open.set(false);
                        }
                    >
                        {render_icon(Icon::LogOut)}
                        " Log out"
                    </a>
                </div>
            </Show>
        </div>
    }
}
