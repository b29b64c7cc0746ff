//! Page chrome state: the mobile navigation drawer, the scrolled flag
//! that condenses the navbar, and the section currently in view.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub nav_open: bool,
    /// True once the page has scrolled past the hero threshold.
    pub scrolled: bool,
    /// Element id of the landing section in view, for nav highlighting.
    pub active_section: Option<&'static str>,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Closing is idempotent, used by every in-page navigation.
    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }
}
