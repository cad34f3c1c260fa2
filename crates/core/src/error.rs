use thiserror::Error;

/// Errors surfaced by the layout library.
///
/// Playback never produces one of these: an adapter that cannot play degrades
/// to an empty surface instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid media source {url:?}: {reason}")]
    InvalidMediaSource { url: String, reason: String },

    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    #[error("invalid layout config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
