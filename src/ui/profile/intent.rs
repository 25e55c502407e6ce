use crate::model::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    Enter,
    Refresh,
    Loaded(Result<User, String>),
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    Submit,
    Finished(Result<(), String>),
}

impl Intent for ProfileIntent {}
