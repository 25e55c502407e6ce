use crate::model::{Account, PayType};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BillFormIntent {
    /// Screen became visible.
    Enter,
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Arrow keys on a choice row.
    CycleLeft,
    CycleRight,
    PayTypesLoaded(Result<Vec<PayType>, String>),
    AccountsLoaded(Result<Vec<Account>, String>),
    Submit,
    Finished(Result<(), String>),
}

impl Intent for BillFormIntent {}
