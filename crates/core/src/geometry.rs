//! Viewport-responsive sizing.
//!
//! [`compute_geometry`] maps the current viewport and a named slot of a preset
//! to an absolute box. It is a pure function of its inputs and the
//! [`LayoutConfig`] constants; screens call it again on every viewport change.

use crate::config::LayoutConfig;
use crate::preset::PresetId;
use crate::viewport::ViewportDimensions;

/// Host the app is running on. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    Web,
    Native,
}

impl HostPlatform {
    pub fn label(self) -> &'static str {
        match self {
            HostPlatform::Web => "web",
            HostPlatform::Native => "native",
        }
    }
}

/// Absolute box in logical pixels. Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn from_dimensions(dims: ViewportDimensions) -> Self {
        Self::new(0.0, 0.0, dims.width, dims.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink on every side, never past zero size.
    pub fn inset(&self, by: f32) -> Self {
        let by_x = by.min(self.width / 2.0);
        let by_y = by.min(self.height / 2.0);
        Self::new(
            self.x + by_x,
            self.y + by_y,
            self.width - 2.0 * by_x,
            self.height - 2.0 * by_y,
        )
    }

    /// Absolute-position CSS for the box.
    pub fn to_css(&self) -> String {
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px;",
            px(self.x),
            px(self.y),
            px(self.width),
            px(self.height)
        )
    }
}

fn px(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VideoSlot {
    Primary,
    Secondary,
}

impl VideoSlot {
    pub fn label(self) -> &'static str {
        match self {
            VideoSlot::Primary => "primary",
            VideoSlot::Secondary => "secondary",
        }
    }
}

/// Named region of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Container everything else is placed in.
    Frame,
    Video(VideoSlot),
    /// Description panel below the media.
    Text,
    /// Caption overlay anchored to the bottom of the media.
    Caption,
}

/// Which region of which preset, on which host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotSpec {
    pub preset: PresetId,
    pub region: Region,
    pub platform: HostPlatform,
}

impl SlotSpec {
    pub fn new(preset: PresetId, region: Region, platform: HostPlatform) -> Self {
        Self {
            preset,
            region,
            platform,
        }
    }
}

/// [`compute_geometry_with`] using the default constants.
pub fn compute_geometry(dims: ViewportDimensions, slot: SlotSpec) -> Rect {
    compute_geometry_with(&LayoutConfig::default(), dims, slot)
}

pub fn compute_geometry_with(cfg: &LayoutConfig, dims: ViewportDimensions, slot: SlotSpec) -> Rect {
    // Re-sanitize in case the caller built the struct by hand.
    let dims = ViewportDimensions::new(dims.width, dims.height);
    let full = Rect::from_dimensions(dims);
    let (w, h) = (dims.width, dims.height);

    match slot.preset {
        PresetId::FullScreenVideo => {
            let media_h = h * cfg.media_fraction;
            match slot.region {
                Region::Frame => full,
                Region::Video(VideoSlot::Primary) => Rect::new(0.0, 0.0, w, media_h),
                Region::Text => Rect::new(0.0, media_h, w, h - media_h),
                _ => Rect::default(),
            }
        }
        PresetId::TwoVideosWithDesc => {
            let media_h = h * cfg.media_fraction;
            let cell_w = w / 2.0;
            match slot.region {
                Region::Frame => full,
                Region::Video(VideoSlot::Primary) => {
                    Rect::new(0.0, 0.0, cell_w, media_h).inset(cfg.video_margin)
                }
                Region::Video(VideoSlot::Secondary) => {
                    Rect::new(cell_w, 0.0, w - cell_w, media_h).inset(cfg.video_margin)
                }
                Region::Text => Rect::new(0.0, media_h, w, h - media_h),
                Region::Caption => Rect::default(),
            }
        }
        PresetId::TwoVideosRatio => {
            let gap = cfg.ratio_gap.min(w);
            let avail = (w - gap).max(0.0);
            let primary_w = avail * cfg.ratio_primary_fraction;
            match slot.region {
                Region::Frame => full,
                Region::Video(VideoSlot::Primary) => Rect::new(0.0, 0.0, primary_w, h),
                Region::Video(VideoSlot::Secondary) => {
                    Rect::new(primary_w + gap, 0.0, avail - primary_w, h)
                }
                _ => Rect::default(),
            }
        }
        PresetId::FullVerticalMobile => {
            let frame = narrow_frame(cfg, dims, slot.platform);
            match slot.region {
                Region::Frame | Region::Video(VideoSlot::Primary) => frame,
                _ => Rect::default(),
            }
        }
        PresetId::FullVerticalWithText => {
            let frame = narrow_frame(cfg, dims, slot.platform);
            match slot.region {
                Region::Frame | Region::Video(VideoSlot::Primary) => frame,
                Region::Caption => {
                    let cap_h = cfg.caption_height.min(frame.height);
                    Rect::new(frame.x, frame.bottom() - cap_h, frame.width, cap_h)
                }
                _ => Rect::default(),
            }
        }
        PresetId::TwoVerticalVideos => {
            let frame = narrow_frame(cfg, dims, slot.platform);
            let top_h = frame.height * cfg.stack_primary_fraction;
            match slot.region {
                Region::Frame => frame,
                Region::Video(VideoSlot::Primary) => Rect::new(frame.x, 0.0, frame.width, top_h),
                Region::Video(VideoSlot::Secondary) => {
                    Rect::new(frame.x, top_h, frame.width, frame.height - top_h)
                }
                _ => Rect::default(),
            }
        }
    }
}

/// Phone-shaped frame: fixed width centred on the web, full width natively.
fn narrow_frame(cfg: &LayoutConfig, dims: ViewportDimensions, platform: HostPlatform) -> Rect {
    match platform {
        HostPlatform::Native => Rect::from_dimensions(dims),
        HostPlatform::Web => {
            let fw = cfg.narrow_frame_width.min(dims.width);
            Rect::new((dims.width - fw) / 2.0, 0.0, fw, dims.height)
        }
    }
}
