use crate::ShellConfig;

/// A completed download waiting on the user's open/close choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOpen {
    pub path: String,
    pub mime: String,
}

/// Transient state owned by the shell. Both scalars the source kept as
/// mutable refs live here: the back-navigation flag and the in-flight
/// download marker. Updated and read on the same logical thread.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellState {
    config: ShellConfig,
    can_go_back: bool,
    exit_prompt_open: bool,
    download_in_flight: Option<String>,
    pending_open: Option<PendingOpen>,
}

impl ShellState {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Whether the embedded browser reported backward navigation available,
    /// as of the last navigation event observed.
    pub fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    pub fn exit_prompt_open(&self) -> bool {
        self.exit_prompt_open
    }

    /// Source URL of the one outstanding download, if any.
    pub fn download_in_flight(&self) -> Option<&str> {
        self.download_in_flight.as_deref()
    }

    pub fn pending_open(&self) -> Option<&PendingOpen> {
        self.pending_open.as_ref()
    }

    pub(crate) fn set_can_go_back(&mut self, can_go_back: bool) {
        self.can_go_back = can_go_back;
    }

    pub(crate) fn open_exit_prompt(&mut self) {
        self.exit_prompt_open = true;
    }

    pub(crate) fn close_exit_prompt(&mut self) {
        self.exit_prompt_open = false;
    }

    pub(crate) fn begin_download(&mut self, url: String) {
        self.download_in_flight = Some(url);
    }

    pub(crate) fn finish_download(&mut self) {
        self.download_in_flight = None;
    }

    pub(crate) fn set_pending_open(&mut self, path: String, mime: String) {
        self.pending_open = Some(PendingOpen { path, mime });
    }

    pub(crate) fn take_pending_open(&mut self) -> Option<PendingOpen> {
        self.pending_open.take()
    }
}
