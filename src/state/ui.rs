//! Local UI chrome state (sidebar tab, sidebar visibility, pickers).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the thread and history
//! stores.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available in the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarTab {
    #[default]
    Chat,
    Schema,
    Databases,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_tab: SidebarTab,
    pub sidebar_open: bool,
    pub model_picker_open: bool,
    pub user_menu_open: bool,
    /// Conversation whose title is being edited in the history list.
    pub renaming: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_tab: SidebarTab::Chat,
            sidebar_open: true,
            model_picker_open: false,
            user_menu_open: false,
            renaming: None,
        }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn show_tab(&mut self, tab: SidebarTab) {
        self.sidebar_tab = tab;
        self.sidebar_open = true;
    }

    /// The schema tab gets a wider sidebar for the editor.
    #[must_use]
    pub fn sidebar_class(&self) -> &'static str {
        match (self.sidebar_open, self.sidebar_tab) {
            (false, _) => "sidebar sidebar--hidden",
            (true, SidebarTab::Schema) => "sidebar sidebar--wide",
            (true, _) => "sidebar",
        }
    }
}
