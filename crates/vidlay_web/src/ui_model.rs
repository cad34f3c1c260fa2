//! UI models that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! drawer inventory on the host.

use vidlay::preset::PresetId;
use vidlay::viewport::ViewportDimensions;

/// One row in the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerEntry {
    pub route: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub fn preset_icon(preset: PresetId) -> &'static str {
    match preset {
        PresetId::FullScreenVideo => "🎬",
        PresetId::TwoVideosWithDesc => "📝",
        PresetId::TwoVideosRatio => "◧",
        PresetId::FullVerticalMobile => "📱",
        PresetId::FullVerticalWithText => "💬",
        PresetId::TwoVerticalVideos => "☰",
    }
}

pub fn drawer_entries() -> Vec<DrawerEntry> {
    PresetId::all()
        .iter()
        .map(|&p| DrawerEntry {
            route: p.route_name(),
            title: p.title(),
            icon: preset_icon(p),
        })
        .collect()
}

pub fn sidebar_item_class(active: bool) -> &'static str {
    if active {
        "sidebar-item active"
    } else {
        "sidebar-item"
    }
}

/// `window.innerWidth/innerHeight` as dimensions; missing values read as 0.
pub fn window_dimensions(inner_width: Option<f64>, inner_height: Option<f64>) -> ViewportDimensions {
    ViewportDimensions::new(
        inner_width.unwrap_or(0.0) as f32,
        inner_height.unwrap_or(0.0) as f32,
    )
}

/// Height of the top bar; the screen area is the window minus this.
pub const TOPBAR_HEIGHT: f32 = 48.0;

pub fn screen_dimensions(window: ViewportDimensions) -> ViewportDimensions {
    ViewportDimensions::new(window.width, window.height - TOPBAR_HEIGHT)
}
