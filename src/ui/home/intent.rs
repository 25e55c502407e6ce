use crate::model::{Bill, Month};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    /// Screen became current. `current` is today's month, used the
    /// first time in; later visits keep the month the user was on.
    Enter { current: Month },
    PrevMonth,
    NextMonth,
    Refresh,
    Loaded(Result<Vec<Bill>, String>),
    SelectUp,
    SelectDown,
}

impl Intent for HomeIntent {}
