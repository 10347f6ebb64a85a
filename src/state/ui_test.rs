use super::*;

#[test]
fn defaults_open_on_chat_tab() {
    let ui = UiState::default();
    assert_eq!(ui.sidebar_tab, SidebarTab::Chat);
    assert!(ui.sidebar_open);
    assert!(!ui.model_picker_open);
    assert_eq!(ui.sidebar_class(), "sidebar");
}

#[test]
fn toggle_hides_and_shows() {
    let mut ui = UiState::default();
    ui.toggle_sidebar();
    assert_eq!(ui.sidebar_class(), "sidebar sidebar--hidden");
    ui.toggle_sidebar();
    assert!(ui.sidebar_open);
}

#[test]
fn show_tab_reopens_sidebar() {
    let mut ui = UiState::default();
    ui.toggle_sidebar();
    ui.show_tab(SidebarTab::Schema);
    assert!(ui.sidebar_open);
    assert_eq!(ui.sidebar_class(), "sidebar sidebar--wide");
}
