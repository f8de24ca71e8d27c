//! Mock source that records every call and replays a configured result

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;
use tubelink::download::error::DownloadError;
use tubelink::download::info::MediaInfo;
use tubelink::download::options::ExtractOptions;
use tubelink::download::source::DownloadSource;
use tubelink::download::ytdlp_errors::YtDlpErrorType;

/// What the mock answers with
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this metadata
    Info(MediaInfo),
    /// Fail as yt-dlp would with the given message
    YtDlpFailure(YtDlpErrorType, String),
    /// Fail as if the process hit the extraction timeout
    Timeout,
}

/// Recorded call: (url, options)
pub type RecordedCall = (String, ExtractOptions);

pub struct MockSource {
    behavior: MockBehavior,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockSource {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Mock returning a single video with the given title and url
    pub fn video(title: &str, url: &str) -> Self {
        Self::new(MockBehavior::Info(MediaInfo {
            id: Some("dQw4w9WgXcQ".to_string()),
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            ext: Some("mp4".to_string()),
            ..Default::default()
        }))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl DownloadSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn extract_info(&self, url: &str, options: &ExtractOptions) -> Result<MediaInfo, DownloadError> {
        self.calls.lock().push((url.to_string(), options.clone()));

        match &self.behavior {
            MockBehavior::Info(info) => Ok(info.clone()),
            MockBehavior::YtDlpFailure(kind, message) => Err(DownloadError::YtDlp {
                kind: *kind,
                message: message.clone(),
            }),
            MockBehavior::Timeout => Err(DownloadError::Timeout(Duration::from_secs(240))),
        }
    }
}
