//! vidlay native shell (Slint).
//!
//! Hosts the layout presets with the native playback adapter. Slint has no
//! video element, so each native surface is drawn as a poster panel carrying
//! the clip title and its playback flags.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use slint::{ComponentHandle, LogicalSize, Timer, TimerMode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vidlay::prelude::*;

mod present;
mod settings;

slint::include_modules!();

/// Matches `preferred-width`/`preferred-height` in `ui/app.slint`.
const INITIAL_WIDTH: f32 = 1200.0;
const INITIAL_HEIGHT: f32 = 800.0;

fn screen_dimensions(ui: &MainWindow) -> ViewportDimensions {
    let window = ui.window();
    let size: LogicalSize = window.size().to_logical(window.scale_factor());
    ViewportDimensions::new(size.width, size.height - ui.get_header_height())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(settings::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cfg = settings::load_layout_config(settings::layout_config_path().as_deref());
    let pref = settings::playback_preference(std::env::var(settings::PLAYBACK_ENV).ok().as_deref());

    let ui = MainWindow::new()?;
    ui.set_drawer_width(cfg.drawer_width(HostPlatform::Native));

    // The window is not shown yet; start from its preferred size.
    let viewport = Viewport::new(ViewportDimensions::new(
        INITIAL_WIDTH,
        INITIAL_HEIGHT - ui.get_header_height(),
    ));

    let sink = {
        let ui_weak = ui.as_weak();
        move |frame: &ScreenFrame| {
            if let Some(ui) = ui_weak.upgrade() {
                present::apply_frame(&ui, frame);
            }
        }
    };

    let switcher = Rc::new(RefCell::new(ScreenSwitcher::new(
        viewport.clone(),
        select_backend(HostPlatform::Native, pref),
        HostPlatform::Native,
        cfg,
        Rc::new(sink),
    )));
    switcher.borrow_mut().start()?;

    {
        let switcher = Rc::clone(&switcher);
        let ui_weak = ui.as_weak();
        ui.on_toggle_drawer(move || {
            let mut sw = switcher.borrow_mut();
            sw.toggle_drawer();
            if let Some(ui) = ui_weak.upgrade() {
                ui.set_drawer_open(sw.is_drawer_open());
            }
        });
    }
    {
        let switcher = Rc::clone(&switcher);
        let ui_weak = ui.as_weak();
        ui.on_close_drawer(move || {
            let mut sw = switcher.borrow_mut();
            sw.close_drawer();
            if let Some(ui) = ui_weak.upgrade() {
                ui.set_drawer_open(false);
            }
        });
    }
    {
        let switcher = Rc::clone(&switcher);
        let ui_weak = ui.as_weak();
        ui.on_navigate(move |route| {
            let mut sw = switcher.borrow_mut();
            if let Err(e) = sw.navigate(route.as_str()) {
                warn!("navigation failed: {e}");
            }
            if let Some(ui) = ui_weak.upgrade() {
                ui.set_drawer_open(sw.is_drawer_open());
            }
        });
    }

    // Slint has no resize callback; poll the window size and let the
    // viewport drop unchanged values.
    let resize_timer = Timer::default();
    {
        let ui_weak = ui.as_weak();
        let viewport = viewport.clone();
        resize_timer.start(TimerMode::Repeated, Duration::from_millis(100), move || {
            if let Some(ui) = ui_weak.upgrade() {
                viewport.set_dimensions(screen_dimensions(&ui));
            }
        });
    }

    info!("vidlay started");
    ui.run()?;

    resize_timer.stop();
    drop(switcher);
    info!(listeners = viewport.listener_count(), "vidlay exiting");
    Ok(())
}
