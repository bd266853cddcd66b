#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome state: dark mode and the dismissible welcome banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub show_welcome: bool,
}
