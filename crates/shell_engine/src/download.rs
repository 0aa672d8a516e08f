use shell_logging::{shell_info, shell_warn};

use crate::dest::ensure_dest_dir;
use crate::mime::infer_mime;
use crate::permission::{PermissionGate, StoragePermission};
use crate::transport::Transport;
use crate::types::{DownloadEvent, DownloadOutcome, DownloadRequest, ProgressSink};

/// The download flow, as one explicit linear sequence:
/// permission, destination directory, streamed transfer, existence check.
///
/// Nothing is retried and nothing is cancellable; every failure returns the
/// shell to its idle state with a tagged outcome.
pub async fn run_download(
    gate: &dyn PermissionGate,
    transport: &dyn Transport,
    permission: StoragePermission,
    request: &DownloadRequest,
    sink: &dyn ProgressSink,
) -> DownloadOutcome {
    if !gate.request(permission) {
        shell_warn!("{:?} denied; aborting download of {}", permission, request.url);
        return DownloadOutcome::PermissionDenied;
    }

    // A failure here is logged but not fatal: the transfer itself reports
    // an unusable directory.
    if let Err(err) = ensure_dest_dir(&request.dest_dir) {
        shell_warn!("could not prepare {}: {}", request.dest_dir.display(), err);
    }

    sink.emit(DownloadEvent::Started {
        url: request.url.clone(),
    });
    shell_info!("downloading {} to {}", request.url, request.dest_path.display());

    match transport
        .download(&request.url, &request.dest_path, sink)
        .await
    {
        Ok(bytes) => {
            if request.dest_path.is_file() {
                shell_info!("download complete: {} bytes at {}", bytes, request.dest_path.display());
                DownloadOutcome::Completed {
                    path: request.dest_path.clone(),
                    mime: infer_mime(&request.file_name),
                }
            } else {
                shell_warn!("transfer reported success but {} is missing", request.dest_path.display());
                DownloadOutcome::FileMissing {
                    path: request.dest_path.clone(),
                }
            }
        }
        Err(err) => {
            shell_warn!("download of {} failed: {}", request.url, err);
            DownloadOutcome::TransportFailure {
                detail: err.to_string(),
            }
        }
    }
}
