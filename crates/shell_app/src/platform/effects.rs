use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use shell_core::{DownloadStatus, Effect, Msg, ShellConfig};
use shell_engine::{DownloadEvent, DownloadOutcome, EngineConfig, EngineHandle};
use shell_logging::{shell_debug, shell_error, shell_info, shell_warn};
use tao::event_loop::EventLoopProxy;
use wry::WebView;

use super::app::UserEvent;
use super::dialogs;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: &ShellConfig, proxy: EventLoopProxy<UserEvent>) -> Self {
        let downloads_root = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
        let engine = EngineHandle::new(EngineConfig::new(
            downloads_root,
            config.download_subdir.clone(),
        ));
        let runner = Self { engine };
        runner.spawn_event_pump(proxy);
        runner
    }

    /// Executes one effect from the pure core. Dialogs block the UI thread,
    /// matching the modal alerts of the source shells. Returns `true` when
    /// the application should exit.
    pub fn run(&self, effect: Effect, webview: &WebView, proxy: &EventLoopProxy<UserEvent>) -> bool {
        match effect {
            Effect::NavigateBack => {
                if let Err(err) = webview.evaluate_script("history.back();") {
                    shell_error!("history.back failed: {err}");
                }
            }
            Effect::ShowExitDialog => {
                let msg = if dialogs::confirm_exit() {
                    Msg::ExitConfirmed
                } else {
                    Msg::ExitCancelled
                };
                let _ = proxy.send_event(UserEvent::Shell(msg));
            }
            Effect::ExitApp => return true,
            Effect::StartDownload { url } => {
                shell_info!("download requested: {url}");
                self.engine.enqueue_download(url);
            }
            Effect::ShowAlert(kind) => dialogs::alert(kind),
            Effect::PromptOpenFile { path, mime } => {
                shell_debug!("offering {path} ({mime})");
                let msg = if dialogs::confirm_open_file(&path) {
                    Msg::OpenFileConfirmed
                } else {
                    Msg::OpenFileDismissed
                };
                let _ = proxy.send_event(UserEvent::Shell(msg));
            }
            Effect::OpenFile { path, mime } => {
                shell_info!("opening {path} as {mime}");
                if let Err(err) = opener::open(Path::new(&path)) {
                    shell_error!("could not open {path}: {err}");
                }
            }
        }
        false
    }

    fn spawn_event_pump(&self, proxy: EventLoopProxy<UserEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    DownloadEvent::Started { url } => shell_info!("download started: {url}"),
                    DownloadEvent::Progress { bytes } => shell_debug!("downloaded {bytes} bytes"),
                    DownloadEvent::Finished { outcome } => {
                        let msg = Msg::DownloadFinished(map_outcome(outcome));
                        let _ = proxy.send_event(UserEvent::Shell(msg));
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_outcome(outcome: DownloadOutcome) -> DownloadStatus {
    match outcome {
        DownloadOutcome::Completed { path, mime } => DownloadStatus::Completed {
            path: path.display().to_string(),
            mime: mime.to_string(),
        },
        DownloadOutcome::PermissionDenied => DownloadStatus::PermissionDenied,
        DownloadOutcome::TransportFailure { detail } => {
            shell_warn!("download failed: {detail}");
            DownloadStatus::TransportFailure
        }
        DownloadOutcome::FileMissing { path } => {
            shell_warn!("downloaded file missing at {}", path.display());
            DownloadStatus::FileMissing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_mapping_keeps_the_user_visible_distinctions() {
        let completed = map_outcome(DownloadOutcome::Completed {
            path: PathBuf::from("/downloads/Academie/report.pdf"),
            mime: "application/pdf",
        });
        assert_eq!(
            completed,
            DownloadStatus::Completed {
                path: "/downloads/Academie/report.pdf".to_string(),
                mime: "application/pdf".to_string(),
            }
        );

        assert_eq!(
            map_outcome(DownloadOutcome::PermissionDenied),
            DownloadStatus::PermissionDenied
        );
        assert_eq!(
            map_outcome(DownloadOutcome::TransportFailure {
                detail: "http status 500".to_string(),
            }),
            DownloadStatus::TransportFailure
        );
        assert_eq!(
            map_outcome(DownloadOutcome::FileMissing {
                path: PathBuf::from("/downloads/Academie/report.pdf"),
            }),
            DownloadStatus::FileMissing
        );
    }
}
