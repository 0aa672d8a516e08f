#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Hardware back press, or its desktop analog.
    BackPressed,
    /// The embedded browser reported a navigation event.
    NavigationChanged { can_go_back: bool },
    /// Raw JSON posted by the loaded page over the message channel.
    PageMessage(String),
    /// User confirmed the exit dialog.
    ExitConfirmed,
    /// User cancelled the exit dialog.
    ExitCancelled,
    /// The download engine finished an attempt.
    DownloadFinished(DownloadStatus),
    /// User chose to open the downloaded file.
    OpenFileConfirmed,
    /// User closed the open-file prompt without opening.
    OpenFileDismissed,
}

/// Shell-side view of a download attempt's outcome, mapped from the engine
/// by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    Completed { path: String, mime: String },
    PermissionDenied,
    TransportFailure,
    FileMissing,
}
