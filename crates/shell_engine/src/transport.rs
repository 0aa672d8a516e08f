use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::types::{DownloadEvent, ProgressSink};

/// Client settings for the one background download. The source configures
/// no timeouts at all, so both default to unset.
#[derive(Debug, Clone, Default)]
pub struct DownloadSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("destination has no parent directory: {0}")]
    Destination(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Moves one URL's body onto disk. Seam for tests and for platforms that
/// supply their own download utility.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Streams the body of `url` into `dest`, returning the bytes written.
    async fn download(
        &self,
        url: &str,
        dest: &Path,
        sink: &dyn ProgressSink,
    ) -> Result<u64, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: DownloadSettings,
}

impl ReqwestTransport {
    pub fn new(settings: DownloadSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| TransportError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn download(
        &self,
        url: &str,
        dest: &Path,
        sink: &dyn ProgressSink,
    ) -> Result<u64, TransportError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| TransportError::InvalidUrl(err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::HttpStatus(status.as_u16()));
        }

        let dir = dest
            .parent()
            .ok_or_else(|| TransportError::Destination(dest.display().to_string()))?;

        // Stream into a temp file, then move into place. A repeat download
        // of the same URL overwrites the previous file.
        let mut tmp = NamedTempFile::new_in(dir)?;
        let mut written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            tmp.write_all(&chunk)?;
            written += chunk.len() as u64;
            sink.emit(DownloadEvent::Progress { bytes: written });
        }
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        if dest.exists() {
            fs::remove_file(dest)?;
        }
        tmp.persist(dest).map_err(|err| TransportError::Io(err.error))?;

        Ok(written)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(err.to_string());
    }
    TransportError::Network(err.to_string())
}
