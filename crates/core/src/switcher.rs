//! Drawer-driven screen switching.
//!
//! The switcher owns the route table and at most one mounted screen. A
//! mounted screen holds the only viewport subscription it needs; replacing the
//! screen drops that subscription before the next one is created.

use std::borrow::Cow;
use std::rc::Rc;

use tracing::debug;

use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use crate::geometry::HostPlatform;
use crate::preset::{compose_with, Composition, PresetId, VideoSpec};
use crate::surface::{PlaybackSurface, VideoSurface};
use crate::viewport::{Subscription, Viewport, ViewportDimensions};

/// A named destination in the drawer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenDef {
    pub name: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub preset: PresetId,
    pub videos: Vec<VideoSpec>,
}

impl ScreenDef {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        title: impl Into<Cow<'static, str>>,
        preset: PresetId,
        videos: Vec<VideoSpec>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            preset,
            videos,
        }
    }

    pub fn from_preset(preset: PresetId) -> Self {
        Self::new(
            preset.route_name(),
            preset.title(),
            preset,
            preset.video_specs(),
        )
    }
}

/// What the host draws for the mounted screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenFrame {
    pub route: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub composition: Composition,
    pub surfaces: Vec<PlaybackSurface>,
}

pub trait FrameSink {
    fn present(&self, frame: &ScreenFrame);
}

impl<F> FrameSink for F
where
    F: Fn(&ScreenFrame),
{
    fn present(&self, frame: &ScreenFrame) {
        self(frame)
    }
}

/// Compose a screen and render every video slot through `backend`.
pub fn render_screen(
    def: &ScreenDef,
    dims: ViewportDimensions,
    platform: HostPlatform,
    cfg: &LayoutConfig,
    backend: &dyn VideoSurface,
) -> ScreenFrame {
    let composition = compose_with(def.preset, &def.videos, dims, platform, cfg);
    let surfaces = composition
        .videos
        .iter()
        .map(|v| match &v.source {
            Some(src) => backend.render(v.key.clone(), src, v.rect),
            None => PlaybackSurface::Empty {
                key: v.key.clone(),
                rect: v.rect,
            },
        })
        .collect();

    ScreenFrame {
        route: def.name.clone(),
        title: def.title.clone(),
        composition,
        surfaces,
    }
}

struct MountedScreen {
    name: Cow<'static, str>,
    _subscription: Subscription,
}

pub struct ScreenSwitcher {
    viewport: Viewport,
    backend: Rc<dyn VideoSurface>,
    platform: HostPlatform,
    cfg: Rc<LayoutConfig>,
    sink: Rc<dyn FrameSink>,
    screens: Vec<ScreenDef>,
    initial_route: Cow<'static, str>,
    current: Option<MountedScreen>,
    drawer_open: bool,
}

impl ScreenSwitcher {
    /// Build a switcher with every preset registered. Nothing is mounted
    /// until [`ScreenSwitcher::start`] or a navigation.
    pub fn new(
        viewport: Viewport,
        backend: Rc<dyn VideoSurface>,
        platform: HostPlatform,
        cfg: LayoutConfig,
        sink: Rc<dyn FrameSink>,
    ) -> Self {
        let screens = PresetId::all()
            .iter()
            .copied()
            .map(ScreenDef::from_preset)
            .collect();
        Self {
            viewport,
            backend,
            platform,
            cfg: Rc::new(cfg),
            sink,
            screens,
            initial_route: Cow::Borrowed(PresetId::default().route_name()),
            current: None,
            drawer_open: false,
        }
    }

    /// Add a route, replacing any route with the same name. Replacing the
    /// mounted route remounts it so resizes render the new definition.
    pub fn register(&mut self, def: ScreenDef) {
        let remount = self.current_route() == Some(def.name.as_ref());
        match self.screens.iter_mut().find(|s| s.name == def.name) {
            Some(existing) => *existing = def.clone(),
            None => self.screens.push(def.clone()),
        }
        if remount {
            if let Some(prev) = self.current.take() {
                debug!(route = %prev.name, "remounting replaced screen");
                drop(prev);
            }
            self.mount(def);
        }
    }

    pub fn routes(&self) -> &[ScreenDef] {
        &self.screens
    }

    pub fn platform(&self) -> HostPlatform {
        self.platform
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    pub fn current_route(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.name.as_ref())
    }

    /// Mount the initial route.
    pub fn start(&mut self) -> Result<()> {
        let initial = self.initial_route.clone();
        self.navigate(&initial)
    }

    pub fn select(&mut self, preset: PresetId) -> Result<()> {
        self.navigate(preset.route_name())
    }

    /// Replace the mounted screen with `name`. Re-selecting the mounted route
    /// only closes the drawer.
    pub fn navigate(&mut self, name: &str) -> Result<()> {
        let def = self
            .screens
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| Error::UnknownScreen(name.to_string()))?;

        self.drawer_open = false;
        if self.current_route() == Some(name) {
            return Ok(());
        }

        if let Some(prev) = self.current.take() {
            debug!(route = %prev.name, "unmounting screen");
            drop(prev);
        }

        self.mount(def);
        Ok(())
    }

    fn mount(&mut self, def: ScreenDef) {
        debug!(route = %def.name, platform = self.platform.label(), "mounting screen");

        let first = render_screen(
            &def,
            self.viewport.dimensions(),
            self.platform,
            &self.cfg,
            self.backend.as_ref(),
        );

        let name = def.name.clone();
        let subscription = {
            let backend = Rc::clone(&self.backend);
            let cfg = Rc::clone(&self.cfg);
            let sink = Rc::clone(&self.sink);
            let platform = self.platform;
            self.viewport.subscribe(move |dims| {
                debug!(route = %def.name, width = dims.width, height = dims.height, "relayout");
                let frame = render_screen(&def, dims, platform, &cfg, backend.as_ref());
                sink.present(&frame);
            })
        };

        self.current = Some(MountedScreen {
            name,
            _subscription: subscription,
        });
        self.sink.present(&first);
    }

    /// Render the mounted screen at the current viewport size without
    /// notifying the sink.
    pub fn snapshot(&self) -> Option<ScreenFrame> {
        let name = self.current_route()?;
        let def = self.screens.iter().find(|s| s.name == name)?;
        Some(render_screen(
            def,
            self.viewport.dimensions(),
            self.platform,
            &self.cfg,
            self.backend.as_ref(),
        ))
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn drawer_width(&self) -> f32 {
        self.cfg.drawer_width(self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::VideoSlot;
    use crate::preset::SurfaceKey;
    use crate::surface::{NoPlayback, WebPlayback};
    use std::cell::RefCell;

    type Frames = Rc<RefCell<Vec<ScreenFrame>>>;

    fn harness(backend: Rc<dyn VideoSurface>) -> (Viewport, ScreenSwitcher, Frames) {
        let viewport = Viewport::new(ViewportDimensions::new(1200.0, 800.0));
        let frames: Frames = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let frames = Rc::clone(&frames);
            move |f: &ScreenFrame| frames.borrow_mut().push(f.clone())
        };
        let switcher = ScreenSwitcher::new(
            viewport.clone(),
            backend,
            HostPlatform::Web,
            LayoutConfig::default(),
            Rc::new(sink),
        );
        (viewport, switcher, frames)
    }

    #[test]
    fn start_mounts_initial_route() {
        let (viewport, mut sw, frames) = harness(Rc::new(WebPlayback));
        assert_eq!(sw.current_route(), None);
        assert_eq!(viewport.listener_count(), 0);

        sw.start().unwrap();
        assert_eq!(sw.current_route(), Some("FullScreenVideo"));
        assert_eq!(viewport.listener_count(), 1);

        let frames = frames.borrow();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].title, "Full Screen with Description");
        assert_eq!(frames[0].surfaces.len(), 1);
    }

    #[test]
    fn switching_releases_previous_subscription() {
        let (viewport, mut sw, frames) = harness(Rc::new(WebPlayback));
        sw.start().unwrap();
        sw.select(PresetId::TwoVideosRatio).unwrap();
        assert_eq!(viewport.listener_count(), 1);

        frames.borrow_mut().clear();
        viewport.set_dimensions(ViewportDimensions::new(1000.0, 500.0));

        let frames = frames.borrow();
        assert_eq!(frames.len(), 1, "stale screen must not be notified");
        assert_eq!(frames[0].route, "TwoVideosRatio");
        let primary = frames[0].surfaces[0].rect();
        assert!((primary.width - 600.0).abs() < 1e-3);
        assert_eq!(primary.height, 500.0);
    }

    #[test]
    fn every_preset_mounts_one_surface_per_slot_with_distinct_keys() {
        let (_viewport, mut sw, frames) = harness(Rc::new(WebPlayback));
        for preset in PresetId::all() {
            frames.borrow_mut().clear();
            sw.select(*preset).unwrap();
            let frames = frames.borrow();
            let frame = frames.last().expect("frame presented on mount");
            assert_eq!(frame.surfaces.len(), preset.video_count(), "{preset}");

            let mut keys: Vec<&str> = frame.surfaces.iter().map(|s| s.key().as_str()).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), preset.video_count(), "{preset}");
        }
    }

    #[test]
    fn ratio_scenario_at_1200x800() {
        let (_viewport, mut sw, _frames) = harness(Rc::new(WebPlayback));
        sw.navigate("TwoVideosRatio").unwrap();
        let frame = sw.snapshot().unwrap();
        let p = frame.surfaces[0].rect();
        let s = frame.surfaces[1].rect();
        assert!((p.width - 720.0).abs() < 1e-3 && p.height == 800.0);
        assert!((s.width - 480.0).abs() < 1e-3 && s.height == 800.0);
    }

    #[test]
    fn unknown_route_keeps_current_screen() {
        let (viewport, mut sw, _frames) = harness(Rc::new(WebPlayback));
        sw.start().unwrap();
        let err = sw.navigate("Settings").unwrap_err();
        assert!(matches!(err, Error::UnknownScreen(ref n) if n == "Settings"));
        assert_eq!(sw.current_route(), Some("FullScreenVideo"));
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn reselecting_current_route_does_not_remount() {
        let (viewport, mut sw, frames) = harness(Rc::new(WebPlayback));
        sw.start().unwrap();
        sw.open_drawer();
        sw.navigate("FullScreenVideo").unwrap();
        assert!(!sw.is_drawer_open());
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn degraded_playback_and_bad_sources_render_nothing() {
        let (_viewport, mut sw, frames) = harness(Rc::new(NoPlayback));
        sw.register(ScreenDef::new(
            "Broken",
            "Broken source",
            PresetId::TwoVideosRatio,
            vec![
                VideoSpec::new(
                    SurfaceKey::from_static("broken/primary"),
                    VideoSlot::Primary,
                    "http://",
                ),
                VideoSpec::new(
                    SurfaceKey::from_static("broken/secondary"),
                    VideoSlot::Secondary,
                    "",
                ),
            ],
        ));
        sw.navigate("Broken").unwrap();
        sw.select(PresetId::FullScreenVideo).unwrap();

        let frames = frames.borrow();
        assert_eq!(frames.len(), 2);
        assert!(frames.iter().all(|f| f.surfaces.iter().all(|s| s.is_empty())));
    }

    #[test]
    fn invalid_source_on_working_backend_only_blanks_that_slot() {
        let (_viewport, mut sw, _frames) = harness(Rc::new(WebPlayback));
        let mut def = ScreenDef::from_preset(PresetId::TwoVerticalVideos);
        def.videos[1].url = "mailto:nobody@example.com".into();
        sw.register(def);
        assert_eq!(sw.routes().len(), PresetId::all().len());

        sw.select(PresetId::TwoVerticalVideos).unwrap();
        let frame = sw.snapshot().unwrap();
        assert!(matches!(frame.surfaces[0], PlaybackSurface::Web(_)));
        assert!(frame.surfaces[1].is_empty());
    }

    #[test]
    fn replacing_mounted_route_remounts_it() {
        let (viewport, mut sw, frames) = harness(Rc::new(WebPlayback));
        sw.start().unwrap();

        let mut def = ScreenDef::from_preset(PresetId::FullScreenVideo);
        def.title = "Replaced".into();
        def.videos[0].url = "not a url".into();
        sw.register(def);
        assert_eq!(viewport.listener_count(), 1);
        assert_eq!(frames.borrow().last().unwrap().title, "Replaced");

        let snap = sw.snapshot().unwrap();
        viewport.set_dimensions(ViewportDimensions::new(1000.0, 700.0));
        let frames = frames.borrow();
        let live = frames.last().unwrap();
        assert_eq!(live.title, snap.title);
        assert!(live.surfaces[0].is_empty());
        assert!(snap.surfaces[0].is_empty());
    }

    #[test]
    fn drawer_state() {
        let (_viewport, mut sw, _frames) = harness(Rc::new(WebPlayback));
        assert!(!sw.is_drawer_open());
        sw.toggle_drawer();
        assert!(sw.is_drawer_open());
        sw.select(PresetId::TwoVerticalVideos).unwrap();
        assert!(!sw.is_drawer_open());
        sw.open_drawer();
        sw.close_drawer();
        assert!(!sw.is_drawer_open());
        assert_eq!(sw.drawer_width(), 300.0);
    }

    #[test]
    fn dropping_switcher_releases_subscription() {
        let (viewport, mut sw, _frames) = harness(Rc::new(WebPlayback));
        sw.start().unwrap();
        drop(sw);
        assert_eq!(viewport.listener_count(), 0);
    }
}
