use std::path::Path;

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use shell_core::AlertKind;

/// Two-choice exit confirmation; `true` means the user chose to exit.
pub fn confirm_exit() -> bool {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Exit App")
        .set_description("Are you sure you want to exit?")
        .set_buttons(MessageButtons::OkCancelCustom(
            "Exit".to_string(),
            "Cancel".to_string(),
        ))
        .show();
    matches!(result, MessageDialogResult::Custom(choice) if choice == "Exit")
}

/// Open/close choice for a completed download; `true` means open.
pub fn confirm_open_file(path: &str) -> bool {
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let result = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("Download complete")
        .set_description(format!("{file_name} has been downloaded. Open it now?"))
        .set_buttons(MessageButtons::OkCancelCustom(
            "Open".to_string(),
            "Close".to_string(),
        ))
        .show();
    matches!(result, MessageDialogResult::Custom(choice) if choice == "Open")
}

/// Single generic failure alert; permission denial gets its own wording.
pub fn alert(kind: AlertKind) {
    let description = match kind {
        AlertKind::PermissionDenied => "Storage permission is required to download files.",
        AlertKind::DownloadFailed => "The download could not be completed.",
    };
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Download")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}
