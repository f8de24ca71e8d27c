//! Extraction mode and the yt-dlp options derived from it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::AppError;

/// Format selector for audio: best audio-only stream, else best overall
pub const AUDIO_FORMAT: &str = "bestaudio/best";

/// Format selector for video: best MP4 stream, else best overall
pub const VIDEO_FORMAT: &str = "best[ext=mp4]/best";

/// What the caller wants to end up with
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    Audio,
    Video,
}

impl Mode {
    /// Parses a caller-supplied mode, ignoring ASCII case.
    ///
    /// ```
    /// use tubelink::download::options::Mode;
    ///
    /// assert_eq!(Mode::parse("Audio").unwrap(), Mode::Audio);
    /// assert!(Mode::parse("flac").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        Mode::from_str(raw).map_err(|_| AppError::InvalidMode(raw.to_string()))
    }
}

/// Options handed to the extractor for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// yt-dlp format selector
    pub format: &'static str,
    /// Resolve only the video a URL points at, not its surrounding playlist
    pub no_playlist: bool,
    /// Metadata only, nothing is written to disk
    pub skip_download: bool,
    pub quiet: bool,
    /// List playlist entries without resolving them
    pub extract_flat: bool,
}

impl ExtractOptions {
    pub fn for_mode(mode: Mode) -> Self {
        let format = match mode {
            Mode::Audio => AUDIO_FORMAT,
            Mode::Video => VIDEO_FORMAT,
        };

        Self {
            format,
            no_playlist: true,
            skip_download: true,
            quiet: true,
            extract_flat: false,
        }
    }

    /// Command line flags for these options (URL and output flags not included)
    pub fn to_ytdlp_args(&self) -> Vec<String> {
        let mut args = vec!["--format".to_string(), self.format.to_string()];

        if self.no_playlist {
            args.push("--no-playlist".to_string());
        }
        if self.skip_download {
            args.push("--skip-download".to_string());
        }
        if self.quiet {
            args.push("--quiet".to_string());
            args.push("--no-warnings".to_string());
        }
        if self.extract_flat {
            args.push("--flat-playlist".to_string());
        }

        args
    }
}
