use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RegisterIntent {
    Enter,
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    ToggleTerms,
    /// Open the user agreement page for reading.
    ViewTerms,
    Submit,
    Finished(Result<(), String>),
}

impl Intent for RegisterIntent {}
