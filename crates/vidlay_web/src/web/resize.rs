use vidlay::viewport::Viewport;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{console_warn, current_window_dimensions};

/// `window` resize listener feeding a [`Viewport`]. Detached on drop.
pub(super) struct ResizeListener {
    callback: Option<Closure<dyn FnMut()>>,
}

impl ResizeListener {
    pub(super) fn attach(viewport: Viewport) -> Self {
        let Some(window) = web_sys::window() else {
            console_warn("vidlay: no window; layout will not follow resizes");
            return Self { callback: None };
        };

        let cb = Closure::wrap(Box::new(move || {
            viewport.set_dimensions(current_window_dimensions());
        }) as Box<dyn FnMut()>);

        match window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref()) {
            Ok(()) => Self { callback: Some(cb) },
            Err(_) => {
                console_warn("vidlay: failed to attach resize listener");
                Self { callback: None }
            }
        }
    }

    pub(super) fn detach(&mut self) {
        let Some(cb) = self.callback.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        self.detach();
    }
}
