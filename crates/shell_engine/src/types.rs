use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::filename::file_name_from_url;

/// One download attempt, derived once from an incoming page message and not
/// retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub file_name: String,
    pub dest_dir: PathBuf,
    pub dest_path: PathBuf,
}

impl DownloadRequest {
    /// Derives the destination from the URL's trailing path segment and the
    /// configured subfolder under the platform downloads location.
    pub fn for_url(url: &str, downloads_root: &Path, subdir: &str) -> Self {
        let file_name = file_name_from_url(url);
        let dest_dir = downloads_root.join(subdir);
        let dest_path = dest_dir.join(&file_name);
        Self {
            url: url.to_string(),
            file_name,
            dest_dir,
            dest_path,
        }
    }
}

/// Tagged result of one download attempt. The flow never throws past this
/// boundary, so callers and tests assert on the outcome kind directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Completed { path: PathBuf, mime: &'static str },
    PermissionDenied,
    TransportFailure { detail: String },
    FileMissing { path: PathBuf },
}

/// Engine-to-shell events. `Started` and `Progress` exist for diagnostic
/// logging only; there is no user-facing progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadEvent {
    Started { url: String },
    Progress { bytes: u64 },
    Finished { outcome: DownloadOutcome },
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: DownloadEvent);
}

pub struct ChannelProgressSink {
    tx: mpsc::Sender<DownloadEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<DownloadEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: DownloadEvent) {
        let _ = self.tx.send(event);
    }
}
