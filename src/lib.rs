//! Tubelink - HTTP API that turns YouTube URLs into direct download links
//!
//! The service validates and normalizes a video, shorts or playlist URL,
//! asks yt-dlp for metadata only, and hands back the title together with the
//! direct, time-limited media URL.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, URL validation and the HTTP server
//! - `download`: extraction options, the yt-dlp backend and link resolution
//! - `cli`: command line interface of the `tubelink` binary

pub mod cli;
pub mod core;
pub mod download;

// Re-export commonly used types for convenience
pub use crate::core::{config, validate_youtube_url, AppError, AppResult};
pub use crate::core::web_server::create_router;
pub use crate::download::{resolve_download_link, DownloadError, DownloadSource, Mode, YtDlpSource};
