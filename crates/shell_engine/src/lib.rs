//! Shell engine: permission gating and the download IO flow.
mod dest;
mod download;
mod engine;
mod filename;
mod mime;
mod permission;
mod transport;
mod types;

pub use dest::{ensure_dest_dir, DestError};
pub use download::run_download;
pub use engine::{EngineConfig, EngineHandle};
pub use filename::file_name_from_url;
pub use mime::{infer_mime, MIME_FALLBACK};
pub use permission::{DownloadsDirGate, PermissionGate, StoragePermission};
pub use transport::{DownloadSettings, ReqwestTransport, Transport, TransportError};
pub use types::{
    ChannelProgressSink, DownloadEvent, DownloadOutcome, DownloadRequest, ProgressSink,
};
