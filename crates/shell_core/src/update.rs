use crate::bridge::{parse_page_message, PageMessage};
use crate::{AlertKind, DownloadStatus, Effect, Msg, ShellState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ShellState, msg: Msg) -> (ShellState, Vec<Effect>) {
    let effects = match msg {
        Msg::BackPressed => {
            // The platform layer consumes the press in every branch; the OS
            // default (pop/exit) must never run.
            if state.can_go_back() {
                vec![Effect::NavigateBack]
            } else if state.exit_prompt_open() {
                // A press while the dialog is already up must not stack a
                // second dialog.
                Vec::new()
            } else {
                state.open_exit_prompt();
                vec![Effect::ShowExitDialog]
            }
        }
        Msg::NavigationChanged { can_go_back } => {
            state.set_can_go_back(can_go_back);
            Vec::new()
        }
        Msg::PageMessage(raw) => match parse_page_message(&raw) {
            Some(PageMessage::NavState { can_go_back }) => {
                state.set_can_go_back(can_go_back);
                Vec::new()
            }
            Some(PageMessage::Download { url }) => {
                if !state.config().download_bridge {
                    return (state, Vec::new());
                }
                if state.download_in_flight().is_some() {
                    // One outstanding download at a time; overlapping
                    // requests are dropped, sequential repeats run fully.
                    return (state, Vec::new());
                }
                state.begin_download(url.clone());
                vec![Effect::StartDownload { url }]
            }
            None => Vec::new(),
        },
        Msg::ExitConfirmed => vec![Effect::ExitApp],
        Msg::ExitCancelled => {
            state.close_exit_prompt();
            Vec::new()
        }
        Msg::DownloadFinished(status) => {
            state.finish_download();
            match status {
                DownloadStatus::Completed { path, mime } => {
                    state.set_pending_open(path.clone(), mime.clone());
                    vec![Effect::PromptOpenFile { path, mime }]
                }
                DownloadStatus::PermissionDenied => {
                    vec![Effect::ShowAlert(AlertKind::PermissionDenied)]
                }
                DownloadStatus::TransportFailure | DownloadStatus::FileMissing => {
                    vec![Effect::ShowAlert(AlertKind::DownloadFailed)]
                }
            }
        }
        Msg::OpenFileConfirmed => match state.take_pending_open() {
            Some(pending) => vec![Effect::OpenFile {
                path: pending.path,
                mime: pending.mime,
            }],
            None => Vec::new(),
        },
        Msg::OpenFileDismissed => {
            state.take_pending_open();
            Vec::new()
        }
    };

    (state, effects)
}
