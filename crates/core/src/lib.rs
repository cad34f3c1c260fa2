//! # vidlay
//!
//! Fixed video layouts for web and native hosts.
//!
//! The crate is host-independent: it computes where every video and text
//! block goes for the current viewport, and describes the playback surface
//! each host should mount. The web app (`vidlay_web`) and the native shell
//! (`vidlay_desktop`) only draw what it hands them.
//!
//! ## Quick Start
//!
//! ```
//! use std::rc::Rc;
//! use vidlay::prelude::*;
//!
//! let viewport = Viewport::new(ViewportDimensions::new(1200.0, 800.0));
//! let backend = select_backend(HostPlatform::Web, PlaybackPreference::Auto);
//! let sink = |frame: &ScreenFrame| println!("{} surfaces", frame.surfaces.len());
//!
//! let mut switcher = ScreenSwitcher::new(
//!     viewport.clone(),
//!     backend,
//!     HostPlatform::Web,
//!     LayoutConfig::default(),
//!     Rc::new(sink),
//! );
//! switcher.start().unwrap();
//! switcher.select(PresetId::TwoVideosRatio).unwrap();
//!
//! // The mounted screen re-lays itself out.
//! viewport.set_dimensions(ViewportDimensions::new(800.0, 600.0));
//! ```
//!
//! ## Modules
//!
//! - [`viewport`]: dimensions and scoped change subscriptions
//! - [`geometry`]: the sizing function
//! - [`preset`]: the layout table and composition
//! - [`surface`]: web/native playback adapters
//! - [`switcher`]: drawer routes and the mounted screen

pub mod config;
pub mod error;
pub mod geometry;
pub mod media;
pub mod preset;
pub mod style;
pub mod surface;
pub mod switcher;
pub mod viewport;

pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use vidlay::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::LayoutConfig;
    pub use crate::geometry::{
        compute_geometry, compute_geometry_with, HostPlatform, Rect, Region, SlotSpec, VideoSlot,
    };
    pub use crate::media::{MediaSource, SampleClip};
    pub use crate::preset::{compose, Composition, PresetId, SurfaceKey, VideoSpec};
    pub use crate::surface::{
        select_backend, Capability, PlaybackPreference, PlaybackSurface, VideoSurface,
    };
    pub use crate::switcher::{FrameSink, ScreenDef, ScreenFrame, ScreenSwitcher};
    pub use crate::viewport::{Subscription, Viewport, ViewportDimensions};
}
