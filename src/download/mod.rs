//! Link extraction: options, backends, and error classification

pub mod error;
pub mod info;
pub mod link;
pub mod options;
pub mod source;
pub mod ytdlp_errors;

// Re-exports for convenience
pub use error::DownloadError;
pub use info::{DownloadLink, MediaInfo};
pub use link::resolve_download_link;
pub use options::{ExtractOptions, Mode};
pub use source::{DownloadSource, YtDlpSource};
