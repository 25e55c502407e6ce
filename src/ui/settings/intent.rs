use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    Enter,
    MoveUp,
    MoveDown,
    /// Open the selected entry, or arm then trigger sign out.
    Activate,
    LogoutFinished(Result<(), String>),
}

impl Intent for SettingsIntent {}
