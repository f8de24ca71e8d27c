//! yt-dlp failure analysis
//!
//! Classifies yt-dlp stderr into a handful of kinds and pulls out the line
//! worth showing to a caller.

/// yt-dlp error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YtDlpErrorType {
    /// Cookies are invalid, expired, or required
    InvalidCookies,
    /// YouTube flagged the request as automated
    BotDetection,
    /// Video is private, removed, or region-locked
    VideoUnavailable,
    /// Timeouts, DNS, refused connections
    NetworkError,
    /// Anything else
    Unknown,
}

impl YtDlpErrorType {
    /// Stable label for log lines
    pub fn as_label(&self) -> &'static str {
        match self {
            YtDlpErrorType::InvalidCookies => "invalid_cookies",
            YtDlpErrorType::BotDetection => "bot_detection",
            YtDlpErrorType::VideoUnavailable => "video_unavailable",
            YtDlpErrorType::NetworkError => "network",
            YtDlpErrorType::Unknown => "ytdlp_unknown",
        }
    }
}

/// Analyzes yt-dlp stderr and determines the error kind
///
/// Checks run from most to least specific; cookie messages often also
/// mention sign-in and bot checks, so they are matched first.
pub fn analyze_ytdlp_error(stderr: &str) -> YtDlpErrorType {
    let stderr_lower = stderr.to_lowercase();

    if stderr_lower.contains("cookies are no longer valid")
        || stderr_lower.contains("cookies have likely been rotated")
        || stderr_lower.contains("sign in to confirm you're not a bot")
        || stderr_lower.contains("please sign in")
        || stderr_lower.contains("use --cookies-from-browser")
        || stderr_lower.contains("use --cookies for the authentication")
    {
        return YtDlpErrorType::InvalidCookies;
    }

    if stderr_lower.contains("bot detection")
        || stderr_lower.contains("http error 403")
        || stderr_lower.contains("unable to extract")
        || stderr_lower.contains("signature extraction failed")
    {
        return YtDlpErrorType::BotDetection;
    }

    if stderr_lower.contains("private video")
        || stderr_lower.contains("video unavailable")
        || stderr_lower.contains("this video is not available")
        || stderr_lower.contains("video is private")
        || stderr_lower.contains("video has been removed")
        || stderr_lower.contains("this video does not exist")
        || stderr_lower.contains("video is not available")
    {
        return YtDlpErrorType::VideoUnavailable;
    }

    if stderr_lower.contains("timed out")
        || stderr_lower.contains("timeout")
        || stderr_lower.contains("connection")
        || stderr_lower.contains("network")
        || stderr_lower.contains("socket")
        || stderr_lower.contains("dns")
        || stderr_lower.contains("failed to connect")
    {
        return YtDlpErrorType::NetworkError;
    }

    YtDlpErrorType::Unknown
}

/// Picks the most useful line out of yt-dlp stderr.
///
/// Prefers the last `ERROR:` line (prefix stripped), then the last non-empty
/// line. Returns `None` for empty stderr.
pub fn summarize_stderr(stderr: &str) -> Option<String> {
    let lines: Vec<&str> = stderr.lines().map(str::trim).filter(|line| !line.is_empty()).collect();

    lines
        .iter()
        .rev()
        .find_map(|line| line.strip_prefix("ERROR:"))
        .map(|line| line.trim().to_string())
        .or_else(|| lines.last().map(|line| line.to_string()))
}

/// Returns an operator hint for logs
pub fn get_fix_recommendations(error_type: YtDlpErrorType) -> &'static str {
    match error_type {
        YtDlpErrorType::InvalidCookies => {
            "Cookies are missing or stale: export fresh youtube.com cookies (Netscape format) and point YTDL_COOKIES_FILE at them"
        }
        YtDlpErrorType::BotDetection => {
            "YouTube is blocking automated requests: update yt-dlp, refresh cookies, or route through YTDL_PROXY"
        }
        YtDlpErrorType::VideoUnavailable => "Video is unavailable; nothing to fix on our side",
        YtDlpErrorType::NetworkError => "Check connectivity to youtube.com and the configured proxy",
        YtDlpErrorType::Unknown => "Inspect the yt-dlp stderr above and make sure yt-dlp is up to date",
    }
}
