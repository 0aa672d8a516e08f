use crate::ShellConfig;

/// Where a navigation request should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Load inside the embedded browser.
    LoadInView,
    /// Reject in the view and hand the URL to the OS handler.
    OpenExternally,
}

/// Decides whether the embedded browser may follow `url` itself.
///
/// A URL stays in the view only when it starts with the configured start
/// URL. This is a plain string-prefix comparison, not an origin comparison:
/// a host name that merely extends the start URL's host string would pass.
/// Kept as-is to match the shipped behavior.
pub fn decide_navigation(config: &ShellConfig, url: &str) -> NavigationDecision {
    if !scheme_allowed(config, url) {
        return NavigationDecision::OpenExternally;
    }
    if url.starts_with(&config.start_url) {
        NavigationDecision::LoadInView
    } else {
        NavigationDecision::OpenExternally
    }
}

fn scheme_allowed(config: &ShellConfig, url: &str) -> bool {
    let scheme = match url.split_once(':') {
        Some((scheme, _)) => scheme,
        None => return false,
    };
    config
        .allowed_schemes
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
}
