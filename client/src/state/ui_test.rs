use super::*;

#[test]
fn defaults_to_closed_and_unscrolled() {
    let state = UiState::default();
    assert!(!state.nav_open);
    assert!(!state.scrolled);
    assert!(state.active_section.is_none());
}

#[test]
fn toggle_and_close() {
    let mut state = UiState::default();
    state.toggle_nav();
    assert!(state.nav_open);
    state.close_nav();
    state.close_nav();
    assert!(!state.nav_open);
}
