use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::ui_model::{drawer_entries, sidebar_item_class, TOPBAR_HEIGHT};

#[component]
pub(super) fn Topbar(title: Signal<String>, toggle_drawer: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header" style=format!("height: {TOPBAR_HEIGHT}px;")>
            <button
                class="icon-btn sidebar-toggle"
                title="Menu"
                on:click=move |_| toggle_drawer.run(())
            >
                "☰"
            </button>
            <h1 class="brand">{move || title.get()}</h1>
        </header>
    }
}

#[component]
pub(super) fn Sidebar(
    drawer_open: ReadSignal<bool>,
    drawer_width: f32,
    current_route: Signal<String>,
    navigate: Callback<&'static str>,
    close_drawer: Callback<()>,
) -> impl IntoView {
    view! {
        // Dimmed backdrop; clicking it closes the drawer.
        <div
            class=move || {
                if drawer_open.get() { "sidebar-overlay open" } else { "sidebar-overlay" }
            }
            on:click=move |_| close_drawer.run(())
        ></div>

        <aside
            class=move || if drawer_open.get() { "sidebar open" } else { "sidebar" }
            style=format!("width: {drawer_width}px;")
        >
            <div class="sidebar-header">
                <div class="sidebar-title">"Layouts"</div>
            </div>

            <div class="sidebar-section">
                {drawer_entries()
                    .into_iter()
                    .map(|entry| {
                        let route = entry.route;
                        view! {
                            <div
                                class=move || sidebar_item_class(current_route.get() == route)
                                role="button"
                                tabindex="0"
                                on:click=move |_| navigate.run(route)
                                on:keydown=move |ev: KeyboardEvent| {
                                    let key = ev.key();
                                    if key == "Enter" || key == " " {
                                        ev.prevent_default();
                                        navigate.run(route);
                                    }
                                }
                            >
                                <span class="sidebar-ico">{entry.icon}</span>
                                <span class="sidebar-label">{entry.title}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}
