use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use shell_logging::shell_error;

use crate::download::run_download;
use crate::permission::{DownloadsDirGate, PermissionGate, StoragePermission};
use crate::transport::{DownloadSettings, ReqwestTransport, Transport};
use crate::types::{ChannelProgressSink, DownloadEvent, DownloadRequest};

/// Where bridged downloads land and how they travel.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub downloads_root: PathBuf,
    pub subdir: String,
    pub settings: DownloadSettings,
    /// Newer platform generations gate downloads behind scoped media-read
    /// permissions, older ones behind the broad external-storage write.
    pub scoped_storage: bool,
}

impl EngineConfig {
    pub fn new(downloads_root: PathBuf, subdir: impl Into<String>) -> Self {
        Self {
            downloads_root,
            subdir: subdir.into(),
            settings: DownloadSettings::default(),
            scoped_storage: true,
        }
    }
}

enum EngineCommand {
    Download { url: String },
}

/// Handle to the download worker thread. Commands are awaited one at a
/// time, so the shell never has more than one download outstanding.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<DownloadEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    shell_error!("could not start download runtime: {err}");
                    return;
                }
            };
            let gate = DownloadsDirGate::new(config.downloads_root.clone());
            let transport = ReqwestTransport::new(config.settings.clone());
            let permission = StoragePermission::required(config.scoped_storage);
            while let Ok(command) = cmd_rx.recv() {
                runtime.block_on(handle_command(
                    &config, &gate, &transport, permission, command, &event_tx,
                ));
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn enqueue_download(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Download { url: url.into() });
    }

    pub fn try_recv(&self) -> Option<DownloadEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    config: &EngineConfig,
    gate: &dyn PermissionGate,
    transport: &dyn Transport,
    permission: StoragePermission,
    command: EngineCommand,
    event_tx: &mpsc::Sender<DownloadEvent>,
) {
    match command {
        EngineCommand::Download { url } => {
            let request = DownloadRequest::for_url(&url, &config.downloads_root, &config.subdir);
            let sink = ChannelProgressSink::new(event_tx.clone());
            let outcome = run_download(gate, transport, permission, &request, &sink).await;
            let _ = event_tx.send(DownloadEvent::Finished { outcome });
        }
    }
}
