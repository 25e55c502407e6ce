use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ForgotIntent {
    Enter,
    Input(char),
    Backspace,
    Submit,
    Finished(Result<(), String>),
}

impl Intent for ForgotIntent {}
