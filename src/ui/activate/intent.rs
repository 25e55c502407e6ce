use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ActivateIntent {
    /// Screen became current; `username` prefills the form when known.
    Enter { username: Option<String> },
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    Submit,
    Finished(Result<(), String>),
}

impl Intent for ActivateIntent {}
