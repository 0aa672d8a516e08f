use std::sync::Once;

use shell_core::{update, Effect, Msg, ShellConfig, ShellState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(shell_logging::initialize_for_tests);
}

fn shell() -> ShellState {
    ShellState::new(ShellConfig::academie())
}

#[test]
fn back_press_navigates_when_history_available() {
    init_logging();
    let state = shell();
    let (state, _) = update(state, Msg::NavigationChanged { can_go_back: true });

    let (state, effects) = update(state, Msg::BackPressed);

    assert_eq!(effects, vec![Effect::NavigateBack]);
    assert!(!state.exit_prompt_open());
}

#[test]
fn back_press_prompts_exit_when_history_exhausted() {
    init_logging();
    let state = shell();

    let (state, effects) = update(state, Msg::BackPressed);

    assert_eq!(effects, vec![Effect::ShowExitDialog]);
    assert!(state.exit_prompt_open());
}

#[test]
fn back_press_while_prompt_open_does_not_stack_dialogs() {
    init_logging();
    let state = shell();
    let (state, _) = update(state, Msg::BackPressed);

    let (state, effects) = update(state, Msg::BackPressed);

    assert!(effects.is_empty());
    assert!(state.exit_prompt_open());
}

#[test]
fn cancelling_exit_leaves_shell_running() {
    init_logging();
    let state = shell();
    let (state, _) = update(state, Msg::BackPressed);

    let (state, effects) = update(state, Msg::ExitCancelled);

    assert!(effects.is_empty());
    assert!(!state.exit_prompt_open());

    // The next press prompts again.
    let (_, effects) = update(state, Msg::BackPressed);
    assert_eq!(effects, vec![Effect::ShowExitDialog]);
}

#[test]
fn confirming_exit_terminates() {
    init_logging();
    let state = shell();
    let (state, _) = update(state, Msg::BackPressed);

    let (_, effects) = update(state, Msg::ExitConfirmed);

    assert_eq!(effects, vec![Effect::ExitApp]);
}

#[test]
fn navigation_events_flip_the_back_flag() {
    init_logging();
    let state = shell();
    assert!(!state.can_go_back());

    let (state, effects) = update(state, Msg::NavigationChanged { can_go_back: true });
    assert!(effects.is_empty());
    assert!(state.can_go_back());

    let (state, _) = update(state, Msg::NavigationChanged { can_go_back: false });
    assert!(!state.can_go_back());

    // With the flag cleared again, back falls through to the exit prompt.
    let (_, effects) = update(state, Msg::BackPressed);
    assert_eq!(effects, vec![Effect::ShowExitDialog]);
}

#[test]
fn navstate_page_message_updates_the_flag() {
    init_logging();
    let state = shell();

    let raw = r#"{"type":"navstate","canGoBack":true}"#.to_string();
    let (state, effects) = update(state, Msg::PageMessage(raw));

    assert!(effects.is_empty());
    assert!(state.can_go_back());
}
