//! Extraction backend abstraction.
//!
//! The `DownloadSource` trait is the seam between request handling and the
//! program that actually talks to the video site. The built-in backend is
//! `YtDlpSource`; tests plug in their own.

pub mod ytdlp;

use async_trait::async_trait;

use crate::download::error::DownloadError;
use crate::download::info::MediaInfo;
use crate::download::options::ExtractOptions;

pub use ytdlp::YtDlpSource;

/// Trait for metadata extraction backends.
///
/// Implementations resolve a canonical URL into metadata without downloading
/// any media.
#[async_trait]
pub trait DownloadSource: Send + Sync {
    /// Human-readable name of this source (e.g., "yt-dlp")
    fn name(&self) -> &str;

    /// Fetch metadata (title, direct URL, playlist entries) for the URL.
    async fn extract_info(&self, url: &str, options: &ExtractOptions) -> Result<MediaInfo, DownloadError>;
}
