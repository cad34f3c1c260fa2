//! Startup settings: layout overrides, playback preference, log filter.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use vidlay::config::LayoutConfig;
use vidlay::surface::PlaybackPreference;

pub const LOG_ENV: &str = "VIDLAY_LOG";
pub const PLAYBACK_ENV: &str = "VIDLAY_PLAYBACK";

/// `<config_dir>/vidlay/layout.json`
pub fn layout_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("vidlay").join("layout.json"))
}

/// Missing file means defaults; a broken one is logged and ignored.
pub fn load_layout_config(path: Option<&Path>) -> LayoutConfig {
    let Some(path) = path else {
        return LayoutConfig::default();
    };
    if !path.exists() {
        return LayoutConfig::default();
    }
    match LayoutConfig::load(path) {
        Ok(cfg) => {
            info!("loaded layout overrides from {}", path.display());
            cfg
        }
        Err(e) => {
            warn!("ignoring {}: {e}", path.display());
            LayoutConfig::default()
        }
    }
}

pub fn playback_preference(raw: Option<&str>) -> PlaybackPreference {
    let Some(raw) = raw else {
        return PlaybackPreference::Auto;
    };
    PlaybackPreference::parse(raw).unwrap_or_else(|| {
        warn!("{PLAYBACK_ENV}={raw:?} not understood; using auto");
        PlaybackPreference::Auto
    })
}
