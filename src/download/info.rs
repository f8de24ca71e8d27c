//! Metadata returned by the extractor and the link we hand back to callers.

use serde::{Deserialize, Serialize};

use crate::download::error::DownloadError;

/// Title used when the metadata has none
pub const DEFAULT_TITLE: &str = "video";

/// The subset of yt-dlp's info document we read.
///
/// Every field is optional; anything else in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Direct, time-limited media URL of the selected format
    pub url: Option<String>,
    pub ext: Option<String>,
    /// Seconds
    pub duration: Option<f64>,
    /// Present for playlist-shaped results; unavailable entries come back as null
    pub entries: Option<Vec<Option<MediaInfo>>>,
}

/// Title plus direct media URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub title: String,
    pub download_url: String,
}

impl MediaInfo {
    pub fn is_playlist(&self) -> bool {
        self.entries.is_some()
    }

    /// Unwraps the metadata into a download link.
    ///
    /// Playlist-shaped metadata resolves to its first entry only. A missing or
    /// empty `url` is an error; a missing title falls back to [`DEFAULT_TITLE`].
    pub fn into_download_link(self) -> Result<DownloadLink, DownloadError> {
        let info = match self.entries {
            Some(entries) => entries
                .into_iter()
                .next()
                .flatten()
                .ok_or(DownloadError::EmptyPlaylist)?,
            None => self,
        };

        let download_url = info
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or(DownloadError::MissingUrl)?;

        Ok(DownloadLink {
            title: info.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            download_url,
        })
    }
}
