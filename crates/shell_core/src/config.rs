/// Static configuration for one shell build.
///
/// The source shipped three copy-pasted shells differing only in these
/// values; a single config object replaces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// The URL the embedded browser loads on startup. Also the prefix that
    /// decides whether a navigation stays inside the view.
    pub start_url: String,
    /// Schemes the embedded browser is allowed to see at all; anything else
    /// is handed to the OS without consulting the prefix check.
    pub allowed_schemes: Vec<String>,
    /// Whether the page-to-shell download message channel is active.
    pub download_bridge: bool,
    /// Subfolder under the platform downloads location for bridged downloads.
    pub download_subdir: String,
}

impl ShellConfig {
    /// The fully equipped variant: Academie dashboard with the download
    /// bridge enabled.
    pub fn academie() -> Self {
        Self::new("https://academie-app.vercel.app/dashboard")
            .with_download_bridge("Academie")
    }

    /// A minimal shell for the given start URL, download bridge disabled.
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            allowed_schemes: ["http", "https", "tel", "mailto", "upi"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            download_bridge: false,
            download_subdir: String::new(),
        }
    }

    /// Enables the download bridge, targeting `subdir` under the platform
    /// downloads location.
    pub fn with_download_bridge(mut self, subdir: impl Into<String>) -> Self {
        self.download_bridge = true;
        self.download_subdir = subdir.into();
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::academie()
    }
}
