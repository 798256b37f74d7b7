#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI preferences: dark mode and the collapsible navigation rail.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_collapsed: bool,
}
