//! YouTube URL validation and normalization
//!
//! Turns whatever the caller pasted into a canonical, parameter-stripped URL:
//! - `youtube.com/watch?v=<id>`, `youtu.be/<id>` and `youtube.com/shorts/<id>`
//!   become `https://www.youtube.com/watch?v=<id>`
//! - `youtube.com/playlist?list=<id>` becomes `https://www.youtube.com/playlist?list=<id>`
//!
//! Video shapes are tried before the playlist shape and the first match wins,
//! so `watch?v=...&list=...` resolves to the single video.

use lazy_regex::{lazy_regex, Lazy, Regex};
use serde::Serialize;
use thiserror::Error;

/// Any of the recognised YouTube hosts, anywhere in the input
static HOST_MARKER: Lazy<Regex> = lazy_regex!(r"youtube\.com|youtu\.be");

/// `youtube.com/watch?v=<11-char id>`
static WATCH_ID: Lazy<Regex> = lazy_regex!(r"youtube\.com/watch\?v=([A-Za-z0-9_-]{11})");

/// `youtu.be/<11-char id>`
static SHORT_LINK_ID: Lazy<Regex> = lazy_regex!(r"youtu\.be/([A-Za-z0-9_-]{11})");

/// `youtube.com/shorts/<11-char id>`
static SHORTS_ID: Lazy<Regex> = lazy_regex!(r"youtube\.com/shorts/([A-Za-z0-9_-]{11})");

/// `youtube.com/playlist?list=<id>`
static PLAYLIST_ID: Lazy<Regex> = lazy_regex!(r"youtube\.com/playlist\?list=([A-Za-z0-9_-]+)");

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Blank input
    #[error("URL must be a non-empty string")]
    Empty,

    /// No YouTube host in the input
    #[error("Not a valid YouTube URL")]
    NotYoutube,

    /// YouTube host, but no video/shorts/playlist id we understand
    #[error("Invalid YouTube URL format")]
    InvalidFormat,
}

/// What a validated URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaKind {
    Video,
    Playlist,
}

/// Normalized form of a validated URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaTarget {
    pub kind: MediaKind,
    pub id: String,
    pub canonical_url: String,
}

impl MediaTarget {
    fn video(id: &str) -> Self {
        Self {
            kind: MediaKind::Video,
            id: id.to_string(),
            canonical_url: format!("https://www.youtube.com/watch?v={}", id),
        }
    }

    fn playlist(id: &str) -> Self {
        Self {
            kind: MediaKind::Playlist,
            id: id.to_string(),
            canonical_url: format!("https://www.youtube.com/playlist?list={}", id),
        }
    }
}

/// Validates a YouTube URL and returns its canonical form.
///
/// # Arguments
/// * `url` - Raw user input; surrounding whitespace is ignored
///
/// # Returns
/// * `Ok(MediaTarget)` with kind, id and canonical URL
/// * `Err(ValidationError::Empty)` for blank input (checked before any pattern)
/// * `Err(ValidationError::NotYoutube)` when no YouTube host is present
/// * `Err(ValidationError::InvalidFormat)` when no id-bearing shape matches
///
/// # Examples
/// ```
/// use tubelink::core::validation::{validate_youtube_url, MediaKind};
///
/// let target = validate_youtube_url("https://youtu.be/dQw4w9WgXcQ?si=share").unwrap();
/// assert_eq!(target.kind, MediaKind::Video);
/// assert_eq!(target.canonical_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
///
/// assert!(validate_youtube_url("https://evil.com/watch?v=dQw4w9WgXcQ").is_err());
/// assert!(validate_youtube_url("   ").is_err());
/// ```
pub fn validate_youtube_url(url: &str) -> Result<MediaTarget, ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !HOST_MARKER.is_match(url) {
        return Err(ValidationError::NotYoutube);
    }

    let video_patterns: [&Regex; 3] = [&*WATCH_ID, &*SHORT_LINK_ID, &*SHORTS_ID];
    for pattern in video_patterns {
        if let Some(id) = pattern.captures(url).and_then(|caps| caps.get(1)) {
            return Ok(MediaTarget::video(id.as_str()));
        }
    }

    if let Some(id) = PLAYLIST_ID.captures(url).and_then(|caps| caps.get(1)) {
        return Ok(MediaTarget::playlist(id.as_str()));
    }

    Err(ValidationError::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";
    const CANONICAL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn test_watch_url() {
        let target = validate_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(target.kind, MediaKind::Video);
        assert_eq!(target.id, ID);
        assert_eq!(target.canonical_url, CANONICAL);
    }

    #[test]
    fn test_watch_url_strips_extra_parameters() {
        let urls = vec![
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ&feature=share",
            "https://music.youtube.com/watch?v=dQw4w9WgXcQ&list=RDAMVM",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "  https://www.youtube.com/watch?v=dQw4w9WgXcQ \n",
        ];

        for url in urls {
            let target = validate_youtube_url(url).unwrap();
            assert_eq!(target.canonical_url, CANONICAL, "Failed for: {}", url);
        }
    }

    #[test]
    fn test_short_link_matches_watch_form() {
        let short = validate_youtube_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
        let watch = validate_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(short, watch);
    }

    #[test]
    fn test_shorts_url() {
        let target = validate_youtube_url("https://www.youtube.com/shorts/dQw4w9WgXcQ?feature=share").unwrap();
        assert_eq!(target.kind, MediaKind::Video);
        assert_eq!(target.canonical_url, CANONICAL);
    }

    #[test]
    fn test_playlist_url() {
        let target = validate_youtube_url("https://www.youtube.com/playlist?list=PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf").unwrap();
        assert_eq!(target.kind, MediaKind::Playlist);
        assert_eq!(target.id, "PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf");
        assert_eq!(
            target.canonical_url,
            "https://www.youtube.com/playlist?list=PLrAXtmErZgOeiKm4sgNOknGvNjby9efdf"
        );
    }

    #[test]
    fn test_video_shape_wins_over_playlist() {
        let target = validate_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123").unwrap();
        assert_eq!(target.kind, MediaKind::Video);
    }

    #[test]
    fn test_longer_id_is_truncated_to_eleven_chars() {
        let target = validate_youtube_url("https://youtu.be/dQw4w9WgXcQextra").unwrap();
        assert_eq!(target.id, ID);
    }

    #[test]
    fn test_empty_input() {
        for url in ["", "   ", "\t\n"] {
            assert_eq!(validate_youtube_url(url), Err(ValidationError::Empty), "Failed for: {:?}", url);
        }
    }

    #[test]
    fn test_not_youtube() {
        let urls = vec![
            "https://evil.com/watch?v=dQw4w9WgXcQ",
            "https://vimeo.com/123456",
            "not a url",
            "youtube dot com",
        ];

        for url in urls {
            assert_eq!(validate_youtube_url(url), Err(ValidationError::NotYoutube), "Failed for: {}", url);
        }
    }

    #[test]
    fn test_invalid_format() {
        let urls = vec![
            "https://www.youtube.com/",
            "https://www.youtube.com/watch?v=short",
            "https://youtu.be/abc",
            "https://www.youtube.com/channel/UC38IQsAvIsxxjztdMZQtwHA",
            "https://www.youtube.com/playlist?list=",
        ];

        for url in urls {
            assert_eq!(
                validate_youtube_url(url),
                Err(ValidationError::InvalidFormat),
                "Failed for: {}",
                url
            );
        }
    }

    #[test]
    fn test_media_kind_display() {
        assert_eq!(MediaKind::Video.to_string(), "video");
        assert_eq!(MediaKind::Playlist.as_ref(), "playlist");
        assert_eq!(serde_json::to_value(MediaKind::Playlist).unwrap(), "playlist");
    }
}
