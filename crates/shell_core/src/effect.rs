#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate the embedded browser one entry backward.
    NavigateBack,
    /// Ask the user whether to exit the application.
    ShowExitDialog,
    /// Terminate the application process.
    ExitApp,
    /// Start one background download of `url`.
    StartDownload { url: String },
    /// Surface a single user-visible failure message.
    ShowAlert(AlertKind),
    /// Offer the user a choice to open or dismiss a completed download.
    PromptOpenFile { path: String, mime: String },
    /// Open the file via the OS view action.
    OpenFile { path: String, mime: String },
}

/// The only failure distinction the user ever sees: permission denial gets
/// its own message, everything else collapses into one generic alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    PermissionDenied,
    DownloadFailed,
}
