//! The fixed set of screen layouts and their composition.

use std::borrow::Cow;
use std::fmt;

use tracing::warn;

use crate::config::LayoutConfig;
use crate::geometry::{compute_geometry_with, HostPlatform, Rect, Region, SlotSpec, VideoSlot};
use crate::media::{MediaSource, SampleClip};
use crate::style::{self, Color, TextStyle};
use crate::viewport::ViewportDimensions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresetId {
    #[default]
    FullScreenVideo,
    TwoVideosWithDesc,
    TwoVideosRatio,
    FullVerticalMobile,
    FullVerticalWithText,
    TwoVerticalVideos,
}

impl PresetId {
    /// Drawer order.
    pub fn all() -> &'static [PresetId] {
        &[
            PresetId::FullScreenVideo,
            PresetId::TwoVideosWithDesc,
            PresetId::TwoVideosRatio,
            PresetId::FullVerticalMobile,
            PresetId::FullVerticalWithText,
            PresetId::TwoVerticalVideos,
        ]
    }

    pub fn route_name(self) -> &'static str {
        match self {
            PresetId::FullScreenVideo => "FullScreenVideo",
            PresetId::TwoVideosWithDesc => "TwoVideosWithDesc",
            PresetId::TwoVideosRatio => "TwoVideosRatio",
            PresetId::FullVerticalMobile => "FullVerticalMobile",
            PresetId::FullVerticalWithText => "FullVerticalWithText",
            PresetId::TwoVerticalVideos => "TwoVerticalVideos",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PresetId::FullScreenVideo => "Full Screen with Description",
            PresetId::TwoVideosWithDesc => "Two Videos with Description",
            PresetId::TwoVideosRatio => "Two Videos (3:2 Ratio)",
            PresetId::FullVerticalMobile => "Full Vertical Mobile",
            PresetId::FullVerticalWithText => "Full Vertical with Text",
            PresetId::TwoVerticalVideos => "Two Vertical Videos",
        }
    }

    /// Kebab-case prefix for surface keys.
    pub fn slug(self) -> &'static str {
        match self {
            PresetId::FullScreenVideo => "full-screen-video",
            PresetId::TwoVideosWithDesc => "two-videos-with-desc",
            PresetId::TwoVideosRatio => "two-videos-ratio",
            PresetId::FullVerticalMobile => "full-vertical-mobile",
            PresetId::FullVerticalWithText => "full-vertical-with-text",
            PresetId::TwoVerticalVideos => "two-vertical-videos",
        }
    }

    pub fn from_route(name: &str) -> Option<PresetId> {
        PresetId::all()
            .iter()
            .copied()
            .find(|p| p.route_name() == name)
    }

    pub fn video_count(self) -> usize {
        match self {
            PresetId::FullScreenVideo
            | PresetId::FullVerticalMobile
            | PresetId::FullVerticalWithText => 1,
            PresetId::TwoVideosWithDesc
            | PresetId::TwoVideosRatio
            | PresetId::TwoVerticalVideos => 2,
        }
    }

    /// Default video table: one entry per slot, with an explicit key.
    pub fn video_specs(self) -> Vec<VideoSpec> {
        let primary = VideoSpec::new(
            SurfaceKey::for_slot(self, VideoSlot::Primary),
            VideoSlot::Primary,
            SampleClip::BigBuckBunny.url(),
        );
        if self.video_count() == 1 {
            return vec![primary];
        }
        vec![
            primary,
            VideoSpec::new(
                SurfaceKey::for_slot(self, VideoSlot::Secondary),
                VideoSlot::Secondary,
                SampleClip::ElephantsDream.url(),
            ),
        ]
    }

    pub fn text_blocks(self) -> &'static [TextBlock] {
        match self {
            PresetId::FullScreenVideo => &FULL_SCREEN_TEXT,
            PresetId::TwoVideosWithDesc => &FEATURED_TEXT,
            PresetId::FullVerticalWithText => &VERTICAL_CAPTION,
            PresetId::TwoVideosRatio
            | PresetId::FullVerticalMobile
            | PresetId::TwoVerticalVideos => &[],
        }
    }

    /// Colour behind the frame.
    pub fn background(self) -> Color {
        match self {
            PresetId::FullScreenVideo | PresetId::TwoVideosWithDesc | PresetId::TwoVideosRatio => {
                style::BLACK
            }
            PresetId::FullVerticalMobile
            | PresetId::FullVerticalWithText
            | PresetId::TwoVerticalVideos => style::PANEL,
        }
    }
}

static FULL_SCREEN_TEXT: [TextBlock; 1] = [TextBlock {
    region: Region::Text,
    title: "Big Buck Bunny",
    body: Some(
        "A large and lovable rabbit deals with three tiny bullies, led by a flying squirrel, \
         who are determined to squelch his happiness.",
    ),
    background: style::PANEL,
    title_style: style::PANEL_TITLE,
}];

static FEATURED_TEXT: [TextBlock; 1] = [TextBlock {
    region: Region::Text,
    title: "Featured Videos",
    body: Some(
        "Watch our curated selection of animated shorts featuring \"Big Buck Bunny\" and \
         \"Elephant's Dream\". These open-source films showcase creative storytelling and \
         amazing animation techniques.",
    ),
    background: style::PANEL,
    title_style: style::PANEL_TITLE,
}];

static VERTICAL_CAPTION: [TextBlock; 1] = [TextBlock {
    region: Region::Caption,
    title: "Big Buck Bunny",
    body: None,
    background: style::SCRIM,
    title_style: style::CAPTION_TITLE,
}];

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// Stable identity of one video instance on a screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceKey(Cow<'static, str>);

impl SurfaceKey {
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    pub fn new(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    pub fn for_slot(preset: PresetId, slot: VideoSlot) -> Self {
        Self::new(format!("{}/{}", preset.slug(), slot.label()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurfaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of a screen's video table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSpec {
    pub key: SurfaceKey,
    pub slot: VideoSlot,
    pub url: Cow<'static, str>,
}

impl VideoSpec {
    pub fn new(key: SurfaceKey, slot: VideoSlot, url: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            slot,
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub region: Region,
    pub title: &'static str,
    pub body: Option<&'static str>,
    pub background: Color,
    pub title_style: TextStyle,
}

impl TextBlock {
    pub fn body_style(&self) -> TextStyle {
        style::PANEL_BODY
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoRegion {
    pub key: SurfaceKey,
    pub slot: VideoSlot,
    /// `None` when the configured URL failed validation.
    pub source: Option<MediaSource>,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRegion {
    pub rect: Rect,
    /// Inner padding applied by the renderer.
    pub padding: f32,
    pub block: &'static TextBlock,
}

/// Everything a renderer needs to draw one preset at one viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub preset: PresetId,
    pub platform: HostPlatform,
    pub viewport: ViewportDimensions,
    pub frame: Rect,
    pub background: Color,
    pub frame_background: Color,
    pub videos: Vec<VideoRegion>,
    pub texts: Vec<TextRegion>,
}

/// Lay out `preset` with its default video table.
pub fn compose(
    preset: PresetId,
    dims: ViewportDimensions,
    platform: HostPlatform,
    cfg: &LayoutConfig,
) -> Composition {
    compose_with(preset, &preset.video_specs(), dims, platform, cfg)
}

/// Lay out `preset` with a caller-supplied video table.
pub fn compose_with(
    preset: PresetId,
    videos: &[VideoSpec],
    dims: ViewportDimensions,
    platform: HostPlatform,
    cfg: &LayoutConfig,
) -> Composition {
    let geometry = |region| compute_geometry_with(cfg, dims, SlotSpec::new(preset, region, platform));

    let videos = videos
        .iter()
        .map(|spec| {
            let source = match MediaSource::parse(&spec.url) {
                Ok(src) => Some(src),
                Err(e) => {
                    warn!(key = %spec.key, "skipping video: {e}");
                    None
                }
            };
            VideoRegion {
                key: spec.key.clone(),
                slot: spec.slot,
                source,
                rect: geometry(Region::Video(spec.slot)),
            }
        })
        .collect();

    let texts = preset
        .text_blocks()
        .iter()
        .map(|block| TextRegion {
            rect: geometry(block.region),
            padding: cfg.text_padding,
            block,
        })
        .collect();

    Composition {
        preset,
        platform,
        viewport: dims,
        frame: geometry(Region::Frame),
        background: preset.background(),
        frame_background: style::BLACK,
        videos,
        texts,
    }
}
