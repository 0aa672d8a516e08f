use std::path::PathBuf;

use shell_logging::shell_debug;

use crate::dest::ensure_dest_dir;

/// Storage permission the platform requires before a download may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoragePermission {
    /// Scoped media-read permission on newer platform generations.
    ReadMediaAll,
    /// Broad external-storage write permission on older generations.
    WriteExternalStorage,
}

impl StoragePermission {
    /// Picks the permission for the platform generation: scoped storage
    /// requests the media-read grant, legacy storage the broad write grant.
    pub fn required(scoped_storage: bool) -> Self {
        if scoped_storage {
            StoragePermission::ReadMediaAll
        } else {
            StoragePermission::WriteExternalStorage
        }
    }
}

/// Asks the OS for a storage grant. Requested once per download attempt and
/// never cached; a denial aborts the attempt without retry.
pub trait PermissionGate: Send + Sync {
    fn request(&self, permission: StoragePermission) -> bool;
}

/// Platform gate: the grant holds when the downloads root exists (or can be
/// created) and accepts a write.
pub struct DownloadsDirGate {
    root: PathBuf,
}

impl DownloadsDirGate {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl PermissionGate for DownloadsDirGate {
    fn request(&self, permission: StoragePermission) -> bool {
        shell_debug!(
            "requesting {:?} for downloads root {}",
            permission,
            self.root.display()
        );
        ensure_dest_dir(&self.root).is_ok()
    }
}
