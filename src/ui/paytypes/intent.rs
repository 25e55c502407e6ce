use crate::model::PayType;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PayTypesIntent {
    Enter,
    Refresh,
    Loaded(Result<Vec<PayType>, String>),
    SelectUp,
    SelectDown,
    /// Reorder: children swap with a sibling, roots move with their
    /// whole block.
    MoveUp,
    MoveDown,
    SaveOrder,
    BeginCreateChild,
    BeginCreateRoot,
    BeginRename,
    BeginDelete,
    ConfirmDelete,
    /// Leave edit or confirm mode without doing anything.
    Cancel,
    Input(char),
    Backspace,
    /// Expense/income switch while naming a new root.
    ToggleKind,
    Submit,
    /// A create, rename, sort or delete came back.
    Mutated {
        result: Result<(), String>,
        toast: &'static str,
    },
}

impl Intent for PayTypesIntent {}
