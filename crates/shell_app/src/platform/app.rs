use std::mem;

use anyhow::Context;
use shell_core::{decide_navigation, update, Msg, NavigationDecision, ShellConfig, ShellState};
use shell_logging::{shell_debug, shell_error, shell_info};
use tao::dpi::LogicalSize;
use tao::event::{ElementState, Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use tao::keyboard::{KeyCode, ModifiersState};
use tao::window::{Window, WindowBuilder};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};

/// Events delivered back onto the UI thread from handlers and workers.
#[derive(Debug, Clone)]
pub enum UserEvent {
    Shell(Msg),
    OpenExternal(String),
}

/// Bridge script injected into every page. Reports backward-navigation
/// availability after loads and history traversal (the embedded browser
/// exposes no native flag here), and exposes the `postMessage` channel the
/// page's download links use.
const PAGE_BRIDGE_SCRIPT: &str = r#"
(function () {
    function reportNavState() {
        var canGoBack = (window.navigation && typeof window.navigation.canGoBack === 'boolean')
            ? window.navigation.canGoBack
            : window.history.length > 1;
        window.ipc.postMessage(JSON.stringify({ type: 'navstate', canGoBack: canGoBack }));
    }

    var push = window.history.pushState;
    window.history.pushState = function () {
        var result = push.apply(this, arguments);
        setTimeout(reportNavState, 0);
        return result;
    };
    var replace = window.history.replaceState;
    window.history.replaceState = function () {
        var result = replace.apply(this, arguments);
        setTimeout(reportNavState, 0);
        return result;
    };

    window.addEventListener('load', reportNavState);
    window.addEventListener('popstate', function () { setTimeout(reportNavState, 0); });

    window.shellBridge = {
        postMessage: function (message) { window.ipc.postMessage(message); }
    };
})();
"#;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let config = ShellConfig::default();
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Academie")
        .with_inner_size(LogicalSize::new(480.0, 800.0))
        .build(&event_loop)
        .context("create window")?;

    let webview = build_webview(&window, &config, &proxy).context("create webview")?;

    let mut shell = ShellState::new(config.clone());
    let runner = EffectRunner::new(&config, proxy.clone());
    let mut modifiers = ModifiersState::default();

    shell_info!("shell started at {}", config.start_url);

    event_loop.run(move |event, _target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::ModifiersChanged(state),
                ..
            } => {
                modifiers = state;
            }
            // The window close request is the desktop stand-in for the
            // hardware back press; the shell decides what it means.
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                dispatch(&mut shell, Msg::BackPressed, &runner, &webview, &proxy, control_flow);
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event: key, .. },
                ..
            } => {
                if key.state == ElementState::Pressed
                    && is_back_key(key.physical_key, modifiers)
                {
                    dispatch(&mut shell, Msg::BackPressed, &runner, &webview, &proxy, control_flow);
                }
            }
            Event::UserEvent(UserEvent::Shell(msg)) => {
                dispatch(&mut shell, msg, &runner, &webview, &proxy, control_flow);
            }
            Event::UserEvent(UserEvent::OpenExternal(url)) => {
                shell_info!("opening externally: {url}");
                if let Err(err) = webbrowser::open(&url) {
                    shell_error!("could not open {url}: {err}");
                }
            }
            _ => {}
        }
    })
}

/// BrowserBack and Alt+Left both map to the back press.
fn is_back_key(key: KeyCode, modifiers: ModifiersState) -> bool {
    key == KeyCode::BrowserBack || (modifiers.alt_key() && key == KeyCode::ArrowLeft)
}

fn dispatch(
    shell: &mut ShellState,
    msg: Msg,
    runner: &EffectRunner,
    webview: &WebView,
    proxy: &EventLoopProxy<UserEvent>,
    control_flow: &mut ControlFlow,
) {
    let state = mem::take(shell);
    let (state, effects) = update(state, msg);
    *shell = state;
    for effect in effects {
        if runner.run(effect, webview, proxy) {
            *control_flow = ControlFlow::Exit;
        }
    }
}

fn build_webview(
    window: &Window,
    config: &ShellConfig,
    proxy: &EventLoopProxy<UserEvent>,
) -> wry::Result<WebView> {
    let nav_config = config.clone();
    let nav_proxy = proxy.clone();
    let ipc_proxy = proxy.clone();

    WebViewBuilder::new()
        .with_url(&config.start_url)
        .with_initialization_script(PAGE_BRIDGE_SCRIPT)
        .with_devtools(cfg!(debug_assertions))
        .with_ipc_handler(move |request| {
            let _ = ipc_proxy.send_event(UserEvent::Shell(Msg::PageMessage(
                request.body().clone(),
            )));
        })
        .with_navigation_handler(move |url| match decide_navigation(&nav_config, &url) {
            NavigationDecision::LoadInView => true,
            NavigationDecision::OpenExternally => {
                let _ = nav_proxy.send_event(UserEvent::OpenExternal(url));
                false
            }
        })
        .with_on_page_load_handler(|event, url| match event {
            PageLoadEvent::Started => shell_debug!("page load started: {url}"),
            PageLoadEvent::Finished => shell_debug!("page load finished: {url}"),
        })
        .build(window)
}
