//! Video embed derivation.
//!
//! Each configured video entry derives at most one typed embed. Entries with
//! a missing URL or an unrecognized platform derive nothing and are skipped
//! silently.

use serde::{Deserialize, Serialize};

use crate::config::VideoEntry;

/// Recognized video hosting platforms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Tiktok,
    /// Catch-all for platform strings this renderer does not recognize.
    #[serde(other)]
    Other,
}

impl Default for Platform {
    fn default() -> Self {
        Self::Other
    }
}

/// A derived iframe embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed {
    /// Embeddable source URL.
    pub src: String,

    /// Accessible iframe title.
    pub title: &'static str,

    /// Whether the iframe allows fullscreen playback.
    pub allow_fullscreen: bool,
}

/// Derive the embed for one entry, or `None` when the entry has no URL or an
/// unrecognized platform.
///
/// YouTube watch-page URLs are rewritten to their embed form by substituting
/// the first `watch?v=` with `embed/`.
pub fn embed(entry: &VideoEntry) -> Option<VideoEmbed> {
    let url = entry.url.as_deref().filter(|u| !u.is_empty())?;

    match entry.platform {
        Platform::Youtube => Some(VideoEmbed {
            src: url.replacen("watch?v=", "embed/", 1),
            title: "YouTube",
            allow_fullscreen: true,
        }),
        Platform::Tiktok => Some(VideoEmbed {
            src: url.to_string(),
            title: "TikTok",
            allow_fullscreen: false,
        }),
        Platform::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(platform: Platform, url: Option<&str>) -> VideoEntry {
        VideoEntry {
            platform,
            url: url.map(String::from),
        }
    }

    #[test]
    fn test_youtube_watch_url_is_rewritten() {
        let embed = embed(&entry(
            Platform::Youtube,
            Some("https://www.youtube.com/watch?v=abc123"),
        ))
        .expect("embed");

        assert_eq!(embed.src, "https://www.youtube.com/embed/abc123");
        assert_eq!(embed.title, "YouTube");
        assert!(embed.allow_fullscreen);
    }

    #[test]
    fn test_youtube_embed_url_passes_through() {
        let embed = embed(&entry(
            Platform::Youtube,
            Some("https://www.youtube.com/embed/abc123"),
        ))
        .expect("embed");

        assert_eq!(embed.src, "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_tiktok_url_passes_through() {
        let embed = embed(&entry(
            Platform::Tiktok,
            Some("https://www.tiktok.com/embed/v2/123"),
        ))
        .expect("embed");

        assert_eq!(embed.src, "https://www.tiktok.com/embed/v2/123");
        assert_eq!(embed.title, "TikTok");
        assert!(!embed.allow_fullscreen);
    }

    #[test]
    fn test_missing_url_derives_nothing() {
        assert!(embed(&entry(Platform::Youtube, None)).is_none());
    }

    #[test]
    fn test_empty_url_derives_nothing() {
        assert!(embed(&entry(Platform::Youtube, Some(""))).is_none());
    }

    #[test]
    fn test_unrecognized_platform_derives_nothing() {
        assert!(embed(&entry(Platform::Other, Some("https://vimeo.com/1"))).is_none());
    }

    #[test]
    fn test_platform_deserializes_lowercase() {
        let platform: Platform = serde_json::from_str(r#""youtube""#).expect("parse");
        assert_eq!(platform, Platform::Youtube);

        let platform: Platform = serde_json::from_str(r#""twitch""#).expect("parse");
        assert_eq!(platform, Platform::Other);
    }
}
