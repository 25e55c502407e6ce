use crate::model::Account;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AccountsIntent {
    Enter,
    Refresh,
    Loaded(Result<Vec<Account>, String>),
    SelectUp,
    SelectDown,
}

impl Intent for AccountsIntent {}
