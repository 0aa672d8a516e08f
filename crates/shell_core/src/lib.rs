//! Shell core: pure state machine for the embedded-browser shell.
mod bridge;
mod config;
mod effect;
mod msg;
mod navigation;
mod state;
mod update;

pub use bridge::{parse_page_message, PageMessage};
pub use config::ShellConfig;
pub use effect::{AlertKind, Effect};
pub use msg::{DownloadStatus, Msg};
pub use navigation::{decide_navigation, NavigationDecision};
pub use state::{PendingOpen, ShellState};
pub use update::update;
