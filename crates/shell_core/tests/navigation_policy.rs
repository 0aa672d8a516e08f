use shell_core::{decide_navigation, NavigationDecision, ShellConfig};

fn config() -> ShellConfig {
    ShellConfig::academie()
}

#[test]
fn start_url_and_descendants_load_in_view() {
    let config = config();
    for url in [
        "https://academie-app.vercel.app/dashboard",
        "https://academie-app.vercel.app/dashboard/courses",
        "https://academie-app.vercel.app/dashboard?tab=grades",
    ] {
        assert_eq!(
            decide_navigation(&config, url),
            NavigationDecision::LoadInView,
            "{url}"
        );
    }
}

#[test]
fn foreign_origins_open_externally() {
    let config = config();
    for url in [
        "https://example.com/",
        "https://vercel.app/dashboard",
        "http://academie-app.vercel.app/dashboard",
    ] {
        assert_eq!(
            decide_navigation(&config, url),
            NavigationDecision::OpenExternally,
            "{url}"
        );
    }
}

#[test]
fn same_origin_outside_prefix_opens_externally() {
    // The check is a prefix match on the full start URL, so even the start
    // origin's own root escapes the view.
    let config = config();
    assert_eq!(
        decide_navigation(&config, "https://academie-app.vercel.app/"),
        NavigationDecision::OpenExternally
    );
}

#[test]
fn contact_schemes_open_externally() {
    let config = config();
    for url in ["tel:+3221234567", "mailto:support@academie.example", "upi:pay"] {
        assert_eq!(
            decide_navigation(&config, url),
            NavigationDecision::OpenExternally,
            "{url}"
        );
    }
}

#[test]
fn unlisted_schemes_open_externally() {
    let config = config();
    for url in ["intent://scan/#Intent;end", "ftp://example.com/file", "not-a-url"] {
        assert_eq!(
            decide_navigation(&config, url),
            NavigationDecision::OpenExternally,
            "{url}"
        );
    }
}

#[test]
fn custom_start_url_drives_the_prefix() {
    let config = ShellConfig::new("https://portal.example.org/app");
    assert_eq!(
        decide_navigation(&config, "https://portal.example.org/app/home"),
        NavigationDecision::LoadInView
    );
    assert_eq!(
        decide_navigation(&config, "https://academie-app.vercel.app/dashboard"),
        NavigationDecision::OpenExternally
    );
}
