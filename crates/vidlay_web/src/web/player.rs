use leptos::prelude::*;
use vidlay::preset::TextRegion;
use vidlay::surface::{PlaybackSurface, WebVideo};
use vidlay::switcher::ScreenFrame;

fn web_videos(frame: &Option<ScreenFrame>) -> Vec<WebVideo> {
    let Some(frame) = frame else {
        return Vec::new();
    };
    frame
        .surfaces
        .iter()
        .filter_map(|s| match s {
            PlaybackSurface::Web(v) => Some(v.clone()),
            // Native descriptions never reach the browser; empty ones draw nothing.
            PlaybackSurface::Native(_) | PlaybackSurface::Empty { .. } => None,
        })
        .collect()
}

#[component]
pub(super) fn ScreenView(frame: ReadSignal<Option<ScreenFrame>>) -> impl IntoView {
    let root_style = move || {
        let bg = frame.with(|f| {
            f.as_ref()
                .map(|f| f.composition.background.to_css())
                .unwrap_or_else(|| "#000000".to_string())
        });
        format!("position: relative; width: 100%; height: 100%; overflow: hidden; background: {bg};")
    };
    let frame_style = move || {
        frame.with(|f| {
            f.as_ref()
                .map(|f| {
                    format!(
                        "{} background: {};",
                        f.composition.frame.to_css(),
                        f.composition.frame_background.to_css()
                    )
                })
                .unwrap_or_default()
        })
    };
    let texts = move || {
        frame.with(|f| {
            f.as_ref()
                .map(|f| f.composition.texts.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="screen-root" style=root_style>
            <div class="screen-frame" style=frame_style></div>
            <For
                each=move || frame.with(web_videos)
                key=|v| v.key.clone()
                children=move |v| view! { <VideoElement video=v frame=frame /> }
            />
            {move || {
                texts()
                    .into_iter()
                    .map(|region| view! { <TextPanel region=region /> })
                    .collect_view()
            }}
        </div>
    }
}

/// One `<video>` element. Kept alive across relayouts of the same screen;
/// only its box style follows the frame.
#[component]
fn VideoElement(video: WebVideo, frame: ReadSignal<Option<ScreenFrame>>) -> impl IntoView {
    let key = video.key.clone();
    let initial_style = video.style();
    let style = move || {
        frame.with(|f| {
            f.as_ref()
                .and_then(|f| f.surfaces.iter().find(|s| s.key() == &key))
                .and_then(|s| match s {
                    PlaybackSurface::Web(v) => Some(v.style()),
                    _ => None,
                })
                .unwrap_or_else(|| initial_style.clone())
        })
    };

    view! {
        <video
            src=video.src.clone()
            autoplay=video.autoplay
            loop=video.looped
            prop:muted=video.muted
            playsinline=video.plays_inline
            controls=video.controls
            style=style
        ></video>
    }
}

#[component]
fn TextPanel(region: TextRegion) -> impl IntoView {
    let block = region.block;
    let style = format!(
        "{} box-sizing: border-box; padding: {}px; background: {};",
        region.rect.to_css(),
        region.padding,
        block.background.to_css()
    );

    view! {
        <div class="text-panel" style=style>
            <h2 style=block.title_style.to_css()>{block.title}</h2>
            {block.body.map(|body| view! { <p style=block.body_style().to_css()>{body}</p> })}
        </div>
    }
}
