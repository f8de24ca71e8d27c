//! Process execution utilities with timeout support
//!
//! Runs yt-dlp with a deadline so a hung extractor cannot pin a request forever.

use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

use crate::download::error::DownloadError;

/// Run an async Command with a timeout.
///
/// stdin is closed and the child is killed if the deadline passes.
/// Returns the process Output (whatever the exit status), or a DownloadError
/// on spawn failure or timeout.
pub async fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> Result<Output, DownloadError> {
    cmd.stdin(Stdio::null()).kill_on_drop(true);

    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(DownloadError::Spawn(e)),
        Err(_) => Err(DownloadError::Timeout(timeout)),
    }
}
