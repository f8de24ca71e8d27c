use std::time::Duration;
use thiserror::Error;

use crate::download::ytdlp_errors::YtDlpErrorType;

/// Structured error type for link extraction.
///
/// Every variant surfaces to HTTP callers as a 500; `subcategory()` keeps
/// them apart in the logs.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// yt-dlp could not be started (binary missing, not executable)
    #[error("Failed to run yt-dlp: {0}")]
    Spawn(#[source] std::io::Error),

    /// yt-dlp did not finish in time and was killed
    #[error("yt-dlp timed out after {0:?}")]
    Timeout(Duration),

    /// yt-dlp exited with a non-zero status
    #[error("{message}")]
    YtDlp { kind: YtDlpErrorType, message: String },

    /// yt-dlp stdout was not the JSON document we expected
    #[error("Failed to parse yt-dlp output: {0}")]
    Parse(#[from] serde_json::Error),

    /// Metadata came back without a direct media URL
    #[error("Could not extract download URL")]
    MissingUrl,

    /// Playlist-shaped metadata with nothing in `entries`
    #[error("Playlist has no entries")]
    EmptyPlaylist,
}

impl DownloadError {
    /// Returns subcategory for logs
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::Spawn(_) => "spawn",
            DownloadError::Timeout(_) => "timeout",
            DownloadError::YtDlp { kind, .. } => kind.as_label(),
            DownloadError::Parse(_) => "parse",
            DownloadError::MissingUrl => "missing_url",
            DownloadError::EmptyPlaylist => "empty_playlist",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_error_display() {
        let err = DownloadError::YtDlp {
            kind: YtDlpErrorType::VideoUnavailable,
            message: "[youtube] abc: Video unavailable".into(),
        };
        assert_eq!(err.to_string(), "[youtube] abc: Video unavailable");
        assert_eq!(
            DownloadError::Timeout(Duration::from_secs(240)).to_string(),
            "yt-dlp timed out after 240s"
        );
    }

    #[test]
    fn test_download_error_subcategory() {
        let ytdlp = |kind| DownloadError::YtDlp {
            kind,
            message: String::new(),
        };
        assert_eq!(ytdlp(YtDlpErrorType::BotDetection).subcategory(), "bot_detection");
        assert_eq!(ytdlp(YtDlpErrorType::Unknown).subcategory(), "ytdlp_unknown");
        assert_eq!(DownloadError::Timeout(Duration::from_millis(5)).subcategory(), "timeout");
        assert_eq!(DownloadError::EmptyPlaylist.subcategory(), "empty_playlist");
    }

    #[test]
    fn test_from_serde_error() {
        let err: DownloadError = serde_json::from_str::<serde_json::Value>("not json").unwrap_err().into();
        assert!(matches!(err, DownloadError::Parse(_)));
        assert_eq!(err.subcategory(), "parse");
    }
}
