use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

// Configuration for the service, read once from the environment.
// `.env` is loaded by `main` before any of these statics are touched.

/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Path to a Netscape-format cookies file passed to yt-dlp via `--cookies`
/// Read from YTDL_COOKIES_FILE environment variable
/// Supports tilde (~) expansion
pub static YTDL_COOKIES_FILE: Lazy<Option<String>> = Lazy::new(|| non_empty_var("YTDL_COOKIES_FILE"));

/// Proxy URL passed to yt-dlp via `--proxy` (e.g. "socks5://127.0.0.1:1080")
/// Read from YTDL_PROXY environment variable
/// "none" and "disabled" are treated as unset
pub static YTDL_PROXY: Lazy<Option<String>> = Lazy::new(|| {
    non_empty_var("YTDL_PROXY").filter(|value| value != "none" && value != "disabled")
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: tubelink.log. Set to an empty string to log to the terminal only.
pub static LOG_FILE_PATH: Lazy<Option<String>> = Lazy::new(|| match env::var("LOG_FILE_PATH") {
    Ok(value) if value.trim().is_empty() => None,
    Ok(value) => Some(value.trim().to_string()),
    Err(_) => Some("tubelink.log".to_string()),
});

/// Log level filter ("error", "warn", "info", "debug", "trace")
/// Read from LOG_LEVEL environment variable
/// Default: info
pub static LOG_LEVEL: Lazy<log::LevelFilter> = Lazy::new(|| {
    env::var("LOG_LEVEL")
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
});

/// HTTP server configuration
pub mod server {
    use once_cell::sync::Lazy;
    use std::env;

    /// Default listen port
    pub const DEFAULT_PORT: u16 = 8000;

    /// Interface to bind
    /// Read from HOST environment variable
    /// Default: 0.0.0.0
    pub static HOST: Lazy<String> = Lazy::new(|| env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()));

    /// Port to listen on
    /// Read from PORT environment variable
    /// Default: 8000
    pub static PORT: Lazy<u16> = Lazy::new(|| {
        env::var("PORT")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT)
    });
}

/// Extraction configuration
pub mod extraction {
    use super::Duration;
    use once_cell::sync::Lazy;
    use std::env;

    /// Default timeout for a single yt-dlp metadata call (in seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 240; // 4 minutes, slow metadata fetches do happen

    /// Timeout for yt-dlp metadata calls
    /// Read from EXTRACT_TIMEOUT_SECS environment variable
    pub static TIMEOUT_SECS: Lazy<u64> = Lazy::new(|| {
        env::var("EXTRACT_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
    });

    /// Timeout for `yt-dlp --version`
    pub const VERSION_TIMEOUT_SECS: u64 = 10;

    /// yt-dlp metadata call timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(*TIMEOUT_SECS)
    }

    /// yt-dlp version probe timeout duration
    pub fn version_timeout() -> Duration {
        Duration::from_secs(VERSION_TIMEOUT_SECS)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
