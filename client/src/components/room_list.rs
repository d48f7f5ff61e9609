//! Room list pane: search box, new-chat button, and one row per room.
//!
//! DESIGN
//! ======
//! Reads and writes `HomeState` from context. Filtering and selection are
//! session-local; nothing is sent or stored.

use leptos::prelude::*;

use crate::components::icons::{Icon, render_icon};
use crate::state::rooms::{HomeState, RoomSummary, unread_badge};

/// Searchable list of rooms with the selected row highlighted.
#[component]
pub fn RoomList() -> impl IntoView {
    let home = expect_context::<RwSignal<HomeState>>();

    let query = move || home.with(|h| h.room_query.clone());
    let visible = Memo::new(move |_| home.with(HomeState::visible_rooms));

    view! {
        <div class="room-list">
            <div class="room-list__actions">
                <div class="room-list__search">
                    {render_icon(Icon::Search)}
                    <input
                        class="room-list__search-input"
                        type="search"
                        placeholder="Search rooms..."
                        prop:value=query
                        on:input=move |ev| home.update(|h| h.room_query = event_target_value(&ev))
                    />
                </div>
                <button class="btn btn--primary room-list__new-chat" on:click=move |_| log::debug!("new chat requested")>
                    {render_icon(Icon::Plus)}
                    " New Chat"
                </button>
            </div>

            <div class="room-list__separator"></div>

            <div class="room-list__rooms">
                {move || {
                    let rooms = visible.get();
                    if rooms.is_empty() {
                        return view! { <p class="room-list__empty">"No rooms match your search."</p> }.into_any();
                    }
                    rooms
                        .into_iter()
                        .map(|room| view! { <RoomRow room=room/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn RoomRow(room: RoomSummary) -> impl IntoView {
    let home = expect_context::<RwSignal<HomeState>>();

    let id_for_class = room.id.clone();
    let id_for_click = room.id.clone();
    let is_selected = move || home.with(|h| h.is_selected(&id_for_class));
    let on_click = move |_| home.update(|h| h.select(&id_for_click));
    let badge = unread_badge(room.unread);

    view! {
        <button
            class="room-list__item"
            class:room-list__item--selected=is_selected
            title=room.kind.label()
            on:click=on_click
        >
            <span class="room-list__icon" aria-label=room.kind.glyph()>{render_icon(Icon::from(room.kind))}</span>
            <span class="room-list__name">{room.name}</span>
            {badge.map(|text| view! { <span class="room-list__badge">{text}</span> })}
        </button>
    }
}
