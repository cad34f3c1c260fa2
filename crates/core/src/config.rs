//! Layout tuning knobs.
//!
//! Every field has a default matching the shipped layouts, so an override file
//! only needs the keys it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::geometry::HostPlatform;

fn default_media_fraction() -> f32 {
    0.7
}

fn default_ratio_primary_fraction() -> f32 {
    0.6
}

fn default_stack_primary_fraction() -> f32 {
    0.5
}

fn default_narrow_frame_width() -> f32 {
    // iPhone 12/13/14 logical width
    390.0
}

fn default_video_margin() -> f32 {
    1.0
}

fn default_text_padding() -> f32 {
    16.0
}

fn default_caption_height() -> f32 {
    56.0
}

fn default_drawer_width_web() -> f32 {
    300.0
}

fn default_drawer_width_native() -> f32 {
    280.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Share of the height given to media in the video-over-text layouts.
    #[serde(default = "default_media_fraction")]
    pub media_fraction: f32,
    /// Primary share of the width in the side-by-side ratio layout.
    #[serde(default = "default_ratio_primary_fraction")]
    pub ratio_primary_fraction: f32,
    /// Gap between the two videos of the ratio layout.
    pub ratio_gap: f32,
    /// Top share of the height in the stacked layout.
    #[serde(default = "default_stack_primary_fraction")]
    pub stack_primary_fraction: f32,
    /// Fixed frame width for the phone-shaped layouts on the web.
    #[serde(default = "default_narrow_frame_width")]
    pub narrow_frame_width: f32,
    #[serde(default = "default_video_margin")]
    pub video_margin: f32,
    #[serde(default = "default_text_padding")]
    pub text_padding: f32,
    #[serde(default = "default_caption_height")]
    pub caption_height: f32,
    #[serde(default = "default_drawer_width_web")]
    pub drawer_width_web: f32,
    #[serde(default = "default_drawer_width_native")]
    pub drawer_width_native: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            media_fraction: default_media_fraction(),
            ratio_primary_fraction: default_ratio_primary_fraction(),
            ratio_gap: 0.0,
            stack_primary_fraction: default_stack_primary_fraction(),
            narrow_frame_width: default_narrow_frame_width(),
            video_margin: default_video_margin(),
            text_padding: default_text_padding(),
            caption_height: default_caption_height(),
            drawer_width_web: default_drawer_width_web(),
            drawer_width_native: default_drawer_width_native(),
        }
    }
}

fn clamp_fraction(name: &str, v: f32, fallback: f32) -> f32 {
    if v.is_finite() && v > 0.0 && v < 1.0 {
        v
    } else {
        warn!("layout config: {name}={v} is outside (0, 1); using {fallback}");
        fallback
    }
}

fn clamp_length(name: &str, v: f32, fallback: f32) -> f32 {
    if v.is_finite() && v >= 0.0 {
        v
    } else {
        warn!("layout config: {name}={v} is negative or not finite; using {fallback}");
        fallback
    }
}

impl LayoutConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let cfg: LayoutConfig = serde_json::from_str(raw)?;
        Ok(cfg.sanitized())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Replace out-of-range values with defaults.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            media_fraction: clamp_fraction("media_fraction", self.media_fraction, d.media_fraction),
            ratio_primary_fraction: clamp_fraction(
                "ratio_primary_fraction",
                self.ratio_primary_fraction,
                d.ratio_primary_fraction,
            ),
            ratio_gap: clamp_length("ratio_gap", self.ratio_gap, d.ratio_gap),
            stack_primary_fraction: clamp_fraction(
                "stack_primary_fraction",
                self.stack_primary_fraction,
                d.stack_primary_fraction,
            ),
            narrow_frame_width: clamp_length(
                "narrow_frame_width",
                self.narrow_frame_width,
                d.narrow_frame_width,
            ),
            video_margin: clamp_length("video_margin", self.video_margin, d.video_margin),
            text_padding: clamp_length("text_padding", self.text_padding, d.text_padding),
            caption_height: clamp_length("caption_height", self.caption_height, d.caption_height),
            drawer_width_web: clamp_length(
                "drawer_width_web",
                self.drawer_width_web,
                d.drawer_width_web,
            ),
            drawer_width_native: clamp_length(
                "drawer_width_native",
                self.drawer_width_native,
                d.drawer_width_native,
            ),
        }
    }

    pub fn drawer_width(&self, platform: HostPlatform) -> f32 {
        match platform {
            HostPlatform::Web => self.drawer_width_web,
            HostPlatform::Native => self.drawer_width_native,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let cfg = LayoutConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, LayoutConfig::default());
        assert_eq!(cfg.drawer_width(HostPlatform::Web), 300.0);
        assert_eq!(cfg.drawer_width(HostPlatform::Native), 280.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = LayoutConfig::from_json_str(r#"{ "ratio_gap": 8, "media_fraction": 0.6 }"#)
            .unwrap();
        assert_eq!(cfg.ratio_gap, 8.0);
        assert_eq!(cfg.media_fraction, 0.6);
        assert_eq!(cfg.narrow_frame_width, 390.0);
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let cfg = LayoutConfig::from_json_str(
            r#"{ "ratio_primary_fraction": 1.5, "text_padding": -3, "stack_primary_fraction": 0 }"#,
        )
        .unwrap();
        assert_eq!(cfg.ratio_primary_fraction, 0.6);
        assert_eq!(cfg.text_padding, 16.0);
        assert_eq!(cfg.stack_primary_fraction, 0.5);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LayoutConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = LayoutConfig::load("/definitely/not/here/layout.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
