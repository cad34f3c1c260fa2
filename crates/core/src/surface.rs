//! Platform playback adapters.
//!
//! A [`VideoSurface`] turns a source and a box into a [`PlaybackSurface`]
//! description that the host renderer mounts. The web adapter describes an
//! HTML `<video>` element; the native adapter describes a native player view.
//! Exactly one adapter is chosen at startup by [`select_backend`] and handed
//! to the screen switcher.

use std::rc::Rc;

use tracing::{info, warn};

use crate::geometry::{HostPlatform, Rect};
use crate::media::MediaSource;
use crate::preset::SurfaceKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFit {
    Cover,
    Contain,
}

impl ObjectFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
        }
    }
}

/// HTML `<video>` element description.
#[derive(Debug, Clone, PartialEq)]
pub struct WebVideo {
    pub key: SurfaceKey,
    pub src: String,
    pub rect: Rect,
    pub autoplay: bool,
    pub looped: bool,
    pub muted: bool,
    pub plays_inline: bool,
    pub controls: bool,
    pub object_fit: ObjectFit,
}

impl WebVideo {
    pub fn style(&self) -> String {
        format!(
            "{} object-fit: {}; background: #000;",
            self.rect.to_css(),
            self.object_fit.as_css()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreSilentSwitch {
    Ignore,
    Obey,
}

/// Native player view description.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeVideo {
    /// Keeps concurrently mounted players from sharing a source.
    pub key: SurfaceKey,
    pub uri: String,
    pub container: &'static str,
    pub is_network: bool,
    pub cache: bool,
    pub rect: Rect,
    pub resize_mode: ObjectFit,
    pub repeat: bool,
    pub muted: bool,
    pub play_in_background: bool,
    pub play_when_inactive: bool,
    pub ignore_silent_switch: IgnoreSilentSwitch,
    pub controls: bool,
    pub paused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackSurface {
    Web(WebVideo),
    Native(NativeVideo),
    /// Nothing to draw: playback unavailable or no valid source.
    Empty { key: SurfaceKey, rect: Rect },
}

impl PlaybackSurface {
    pub fn key(&self) -> &SurfaceKey {
        match self {
            PlaybackSurface::Web(v) => &v.key,
            PlaybackSurface::Native(v) => &v.key,
            PlaybackSurface::Empty { key, .. } => key,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            PlaybackSurface::Web(v) => v.rect,
            PlaybackSurface::Native(v) => v.rect,
            PlaybackSurface::Empty { rect, .. } => *rect,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PlaybackSurface::Empty { .. })
    }
}

pub trait VideoSurface {
    fn name(&self) -> &'static str;

    fn capability(&self) -> Capability;

    /// Describe a surface for `source` filling `rect`.
    fn render(&self, key: SurfaceKey, source: &MediaSource, rect: Rect) -> PlaybackSurface;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebPlayback;

impl VideoSurface for WebPlayback {
    fn name(&self) -> &'static str {
        "web"
    }

    fn capability(&self) -> Capability {
        Capability::Available
    }

    fn render(&self, key: SurfaceKey, source: &MediaSource, rect: Rect) -> PlaybackSurface {
        PlaybackSurface::Web(WebVideo {
            key,
            src: source.to_string(),
            rect,
            autoplay: true,
            looped: true,
            muted: true,
            plays_inline: true,
            controls: true,
            object_fit: ObjectFit::Cover,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NativePlayback {
    capability: Capability,
}

impl NativePlayback {
    pub fn new(capability: Capability) -> Self {
        Self { capability }
    }
}

impl Default for NativePlayback {
    fn default() -> Self {
        Self::new(Capability::Available)
    }
}

impl VideoSurface for NativePlayback {
    fn name(&self) -> &'static str {
        "native"
    }

    fn capability(&self) -> Capability {
        self.capability
    }

    fn render(&self, key: SurfaceKey, source: &MediaSource, rect: Rect) -> PlaybackSurface {
        if self.capability == Capability::Unavailable {
            return PlaybackSurface::Empty { key, rect };
        }
        PlaybackSurface::Native(NativeVideo {
            key,
            uri: source.to_string(),
            container: "mp4",
            is_network: true,
            cache: false,
            rect,
            resize_mode: ObjectFit::Cover,
            repeat: true,
            muted: true,
            play_in_background: false,
            play_when_inactive: false,
            ignore_silent_switch: IgnoreSilentSwitch::Ignore,
            controls: true,
            paused: false,
        })
    }
}

/// Adapter that never draws anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlayback;

impl VideoSurface for NoPlayback {
    fn name(&self) -> &'static str {
        "none"
    }

    fn capability(&self) -> Capability {
        Capability::Unavailable
    }

    fn render(&self, key: SurfaceKey, _source: &MediaSource, rect: Rect) -> PlaybackSurface {
        PlaybackSurface::Empty { key, rect }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackPreference {
    #[default]
    Auto,
    /// Force the degraded path.
    Disabled,
}

impl PlaybackPreference {
    pub fn parse(v: &str) -> Option<Self> {
        match v.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Some(PlaybackPreference::Auto),
            "none" | "off" | "disabled" => Some(PlaybackPreference::Disabled),
            _ => None,
        }
    }
}

/// Pick the adapter for this process. Called once at startup.
pub fn select_backend(platform: HostPlatform, pref: PlaybackPreference) -> Rc<dyn VideoSurface> {
    let backend: Rc<dyn VideoSurface> = match (pref, platform) {
        (PlaybackPreference::Disabled, _) => Rc::new(NoPlayback),
        (PlaybackPreference::Auto, HostPlatform::Web) => Rc::new(WebPlayback),
        (PlaybackPreference::Auto, HostPlatform::Native) => Rc::new(NativePlayback::default()),
    };
    if backend.capability() == Capability::Unavailable {
        warn!(platform = platform.label(), "video playback unavailable; surfaces render empty");
    } else {
        info!(platform = platform.label(), backend = backend.name(), "selected playback backend");
    }
    backend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::SampleClip;

    fn src() -> MediaSource {
        SampleClip::BigBuckBunny.source().unwrap()
    }

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 640.0, 360.0)
    }

    #[test]
    fn web_surface_autoplays_muted_looped_inline() {
        let s = WebPlayback.render(SurfaceKey::from_static("a"), &src(), rect());
        let PlaybackSurface::Web(v) = s else {
            panic!("expected web surface");
        };
        assert!(v.autoplay && v.looped && v.muted && v.plays_inline && v.controls);
        assert_eq!(v.object_fit, ObjectFit::Cover);
        assert!(v.style().contains("object-fit: cover;"));
        assert!(v.style().contains("width: 640px;"));
        assert_eq!(v.src, SampleClip::BigBuckBunny.url());
    }

    #[test]
    fn native_surface_keeps_key_and_flags() {
        let s = NativePlayback::default().render(SurfaceKey::from_static("k1"), &src(), rect());
        let PlaybackSurface::Native(v) = s else {
            panic!("expected native surface");
        };
        assert_eq!(v.key.as_str(), "k1");
        assert!(v.repeat && v.muted && v.is_network);
        assert!(!v.cache && !v.play_in_background && !v.play_when_inactive && !v.paused);
        assert_eq!(v.resize_mode, ObjectFit::Cover);
        assert_eq!(v.container, "mp4");
    }

    #[test]
    fn unavailable_native_degrades_to_empty() {
        let backend = NativePlayback::new(Capability::Unavailable);
        let s = backend.render(SurfaceKey::from_static("k"), &src(), rect());
        assert!(s.is_empty());
        assert_eq!(s.rect(), rect());
        assert_eq!(s.key().as_str(), "k");
    }

    #[test]
    fn backend_selection() {
        assert_eq!(select_backend(HostPlatform::Web, PlaybackPreference::Auto).name(), "web");
        assert_eq!(
            select_backend(HostPlatform::Native, PlaybackPreference::Auto).name(),
            "native"
        );
        let none = select_backend(HostPlatform::Web, PlaybackPreference::Disabled);
        assert_eq!(none.capability(), Capability::Unavailable);
        assert!(none
            .render(SurfaceKey::from_static("x"), &src(), rect())
            .is_empty());
    }

    #[test]
    fn preference_parsing() {
        assert_eq!(PlaybackPreference::parse("NONE"), Some(PlaybackPreference::Disabled));
        assert_eq!(PlaybackPreference::parse(""), Some(PlaybackPreference::Auto));
        assert_eq!(PlaybackPreference::parse("vlc"), None);
    }
}
