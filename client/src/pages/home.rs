//! Home screen: icon rail, room list, and the welcome panel.

use leptos::prelude::*;

use crate::components::icon_rail::IconRail;
use crate::components::room_list::RoomList;
use crate::components::welcome_panel::WelcomePanel;
use crate::state::session::demo_user;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <IconRail user=demo_user()/>
            <RoomList/>
            <WelcomePanel/>
        </div>
    }
}
