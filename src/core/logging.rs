//! Logging initialization and configuration checking
//!
//! This module provides:
//! - Logger initialization (console + optional file)
//! - yt-dlp configuration logging at startup

use anyhow::Result;
use log::LevelFilter;
use simplelog::*;
use std::fs::File;

use crate::core::config;
use crate::download::source::ytdlp::{mask_proxy_password, resolve_cookies_path};

/// Initialize logger for console and, when a path is given, file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file, `None` for console only
/// * `level` - Maximum level written to every sink
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or a logger was already set
pub fn init_logger(log_file_path: Option<&str>, level: LevelFilter) -> Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file_path {
        let log_file = File::create(path).map_err(|e| anyhow::anyhow!("Failed to create log file {}: {}", path, e))?;
        loggers.push(WriteLogger::new(level, Config::default(), log_file));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the yt-dlp related configuration at application startup
///
/// Reports the binary, the extraction timeout, whether the cookies file
/// exists and the proxy (password masked).
pub fn log_extractor_configuration() {
    log::info!("yt-dlp binary: {}", *config::YTDL_BIN);
    log::info!("Extraction timeout: {}s", *config::extraction::TIMEOUT_SECS);

    match config::YTDL_COOKIES_FILE.as_deref() {
        Some(cookies_file) => match resolve_cookies_path(cookies_file) {
            Some(path) => log::info!("YTDL_COOKIES_FILE: {}", path),
            None => {
                log::error!("YTDL_COOKIES_FILE: {} (FILE NOT FOUND)", cookies_file);
                log::error!("   Requests will run without cookies");
            }
        },
        None => log::info!("YTDL_COOKIES_FILE: not set"),
    }

    match config::YTDL_PROXY.as_deref() {
        Some(proxy) => log::info!("YTDL_PROXY: {}", mask_proxy_password(proxy)),
        None => log::info!("YTDL_PROXY: not set, using direct connection"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    #[test]
    fn test_init_logger_with_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        // A global logger may already be installed by another test; either
        // outcome is fine, but the file must have been created first.
        let _ = init_logger(Some(path), LevelFilter::Info);
        assert!(temp_file.path().exists());
    }

    #[test]
    fn test_init_logger_bad_path() {
        let result = init_logger(Some("/nonexistent-dir/tubelink/app.log"), LevelFilter::Info);
        assert!(result.is_err());
    }
}
