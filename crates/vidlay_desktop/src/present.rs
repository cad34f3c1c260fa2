//! Turn a [`ScreenFrame`] into the window's models.

use slint::{Color as SlintColor, ModelRc, SharedString, VecModel};
use vidlay::media::SampleClip;
use vidlay::preset::{PresetId, TextRegion};
use vidlay::style::Color;
use vidlay::surface::{NativeVideo, ObjectFit, PlaybackSurface};
use vidlay::switcher::ScreenFrame;

use crate::{DrawerItem, MainWindow, TextTile, VideoTile};

fn color(c: Color) -> SlintColor {
    SlintColor::from_argb_u8(c.a, c.r, c.g, c.b)
}

fn clip_title(uri: &str) -> String {
    SampleClip::all()
        .iter()
        .find(|c| c.url() == uri)
        .map(|c| c.title().to_string())
        .unwrap_or_else(|| uri.rsplit('/').next().unwrap_or(uri).to_string())
}

/// Playback flags shown under the poster, e.g. `loop · muted · cover · mp4`.
pub fn native_detail(v: &NativeVideo) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if v.repeat {
        parts.push("loop");
    }
    if v.muted {
        parts.push("muted");
    }
    if v.controls {
        parts.push("controls");
    }
    parts.push(match v.resize_mode {
        ObjectFit::Cover => "cover",
        ObjectFit::Contain => "contain",
    });
    parts.push(v.container);
    parts.join(" · ")
}

pub fn video_tiles(frame: &ScreenFrame) -> Vec<VideoTile> {
    frame
        .surfaces
        .iter()
        .filter_map(|s| match s {
            PlaybackSurface::Native(v) => Some(VideoTile {
                x: v.rect.x,
                y: v.rect.y,
                w: v.rect.width,
                h: v.rect.height,
                title: SharedString::from(clip_title(&v.uri)),
                detail: SharedString::from(native_detail(v)),
            }),
            // Web surfaces only exist in the browser build.
            PlaybackSurface::Web(_) | PlaybackSurface::Empty { .. } => None,
        })
        .collect()
}

fn text_tile(t: &TextRegion) -> TextTile {
    let block = t.block;
    let body_style = block.body_style();
    TextTile {
        x: t.rect.x,
        y: t.rect.y,
        w: t.rect.width,
        h: t.rect.height,
        padding: t.padding,
        background: color(block.background),
        title: SharedString::from(block.title),
        title_color: color(block.title_style.color),
        title_size: block.title_style.font_size,
        title_weight: i32::from(block.title_style.font_weight),
        body: SharedString::from(block.body.unwrap_or_default()),
        body_color: color(body_style.color),
        body_size: body_style.font_size,
    }
}

pub fn drawer_items(active_route: &str) -> Vec<DrawerItem> {
    PresetId::all()
        .iter()
        .map(|p| DrawerItem {
            route: SharedString::from(p.route_name()),
            title: SharedString::from(p.title()),
            active: p.route_name() == active_route,
        })
        .collect()
}

pub fn apply_frame(ui: &MainWindow, frame: &ScreenFrame) {
    let c = &frame.composition;
    ui.set_screen_title(SharedString::from(frame.title.as_ref()));
    ui.set_screen_background(color(c.background));
    ui.set_frame_background(color(c.frame_background));
    ui.set_frame_x(c.frame.x);
    ui.set_frame_y(c.frame.y);
    ui.set_frame_w(c.frame.width);
    ui.set_frame_h(c.frame.height);
    ui.set_videos(ModelRc::new(VecModel::from(video_tiles(frame))));
    ui.set_texts(ModelRc::new(VecModel::from(
        c.texts.iter().map(text_tile).collect::<Vec<_>>(),
    )));
    ui.set_drawer_items(ModelRc::new(VecModel::from(drawer_items(&frame.route))));
}
