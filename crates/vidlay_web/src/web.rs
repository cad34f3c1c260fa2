use std::rc::Rc;

use leptos::prelude::*;
use vidlay::prelude::*;

use crate::ui_model::{screen_dimensions, window_dimensions};

mod player;
mod resize;
mod shell;

use player::ScreenView;
use resize::ResizeListener;
use shell::{Sidebar, Topbar};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

pub(crate) fn console_warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

pub(crate) fn current_window_dimensions() -> ViewportDimensions {
    let Some(window) = web_sys::window() else {
        return ViewportDimensions::default();
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    screen_dimensions(window_dimensions(w, h))
}

#[component]
fn App() -> impl IntoView {
    let (frame, set_frame) = signal::<Option<ScreenFrame>>(None);
    let (drawer_open, set_drawer_open) = signal(false);

    let viewport = Viewport::new(current_window_dimensions());
    let sink = move |f: &ScreenFrame| set_frame.set(Some(f.clone()));
    let mut switcher = ScreenSwitcher::new(
        viewport.clone(),
        select_backend(HostPlatform::Web, PlaybackPreference::Auto),
        HostPlatform::Web,
        LayoutConfig::default(),
        Rc::new(sink),
    );
    if let Err(e) = switcher.start() {
        console_warn(&format!("vidlay: {e}"));
    }
    let drawer_width = switcher.drawer_width();

    let switcher = StoredValue::new_local(switcher);
    let resize = StoredValue::new_local(ResizeListener::attach(viewport));

    on_cleanup(move || {
        resize.try_update_value(|listener| listener.detach());
    });

    let sync_drawer = move || {
        if let Some(open) = switcher.try_with_value(|s| s.is_drawer_open()) {
            set_drawer_open.set(open);
        }
    };

    let toggle_drawer = Callback::new(move |()| {
        switcher.update_value(|s| s.toggle_drawer());
        sync_drawer();
    });

    let close_drawer = Callback::new(move |()| {
        switcher.update_value(|s| s.close_drawer());
        sync_drawer();
    });

    let navigate = Callback::new(move |route: &'static str| {
        switcher.update_value(|s| {
            if let Err(e) = s.navigate(route) {
                console_warn(&format!("vidlay: {e}"));
            }
        });
        sync_drawer();
    });

    let current_route = Signal::derive(move || {
        frame.with(|f| f.as_ref().map(|f| f.route.to_string()).unwrap_or_default())
    });
    let current_title = Signal::derive(move || {
        frame.with(|f| f.as_ref().map(|f| f.title.to_string()).unwrap_or_default())
    });

    view! {
        <div class="app-shell">
            <Topbar title=current_title toggle_drawer=toggle_drawer />
            <Sidebar
                drawer_open=drawer_open
                drawer_width=drawer_width
                current_route=current_route
                navigate=navigate
                close_drawer=close_drawer
            />
            <main class="screen">
                <ScreenView frame=frame />
            </main>
        </div>
    }
}
