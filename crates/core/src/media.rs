//! Media sources and the bundled sample catalog.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

pub const BIG_BUCK_BUNNY_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";
pub const ELEPHANTS_DREAM_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4";

/// An immutable, validated URL pointing at a playable media file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaSource {
    url: Url,
}

impl MediaSource {
    /// Parse and validate a source. Only `http` and `https` are accepted.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidMediaSource {
                url: raw.to_string(),
                reason: "empty url".to_string(),
            });
        }

        let url = Url::parse(trimmed).map_err(|e| Error::InvalidMediaSource {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidMediaSource {
                    url: raw.to_string(),
                    reason: format!("unsupported scheme {other:?}"),
                })
            }
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(Error::InvalidMediaSource {
                url: raw.to_string(),
                reason: "missing host".to_string(),
            });
        }

        Ok(Self { url })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Last path segment, used as a fallback label.
    pub fn file_name(&self) -> &str {
        self.url
            .path_segments()
            .and_then(|mut segs| segs.next_back())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.url.host_str().unwrap_or_default())
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sample clips shipped with the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleClip {
    BigBuckBunny,
    ElephantsDream,
}

impl SampleClip {
    pub fn url(self) -> &'static str {
        match self {
            SampleClip::BigBuckBunny => BIG_BUCK_BUNNY_URL,
            SampleClip::ElephantsDream => ELEPHANTS_DREAM_URL,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SampleClip::BigBuckBunny => "Big Buck Bunny",
            SampleClip::ElephantsDream => "Elephant's Dream",
        }
    }

    pub fn source(self) -> Result<MediaSource> {
        MediaSource::parse(self.url())
    }

    pub fn all() -> &'static [SampleClip] {
        &[SampleClip::BigBuckBunny, SampleClip::ElephantsDream]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_parses() {
        for clip in SampleClip::all() {
            let src = clip.source().expect("sample url must be valid");
            assert!(src.as_str().ends_with(".mp4"));
            assert!(!clip.title().trim().is_empty());
        }
        assert_eq!(
            SampleClip::BigBuckBunny.source().unwrap().file_name(),
            "BigBuckBunny.mp4"
        );
    }

    #[test]
    fn rejects_empty_and_non_http() {
        assert!(matches!(
            MediaSource::parse("   "),
            Err(Error::InvalidMediaSource { .. })
        ));
        assert!(MediaSource::parse("not a url").is_err());
        assert!(MediaSource::parse("file:///tmp/clip.mp4").is_err());
        assert!(MediaSource::parse("ftp://example.com/clip.mp4").is_err());
    }

    #[test]
    fn equality_is_by_value() {
        let a = MediaSource::parse(BIG_BUCK_BUNNY_URL).unwrap();
        let b = MediaSource::parse(&format!("  {BIG_BUCK_BUNNY_URL} ")).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, SampleClip::ElephantsDream.source().unwrap());
    }
}
