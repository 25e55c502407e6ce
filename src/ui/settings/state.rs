use crate::ui::mvi::UiState;

pub const ENTRY_TERMS: usize = 0;
pub const ENTRY_PRIVACY: usize = 1;
pub const ENTRY_SIGN_OUT: usize = 2;
pub const ENTRY_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub selected: usize,
    /// Set by the first Enter on sign out; the second one goes through.
    pub confirm_logout: bool,
    pub busy: bool,
    pub error: Option<String>,
}

impl UiState for SettingsState {}
