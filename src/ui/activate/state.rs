use crate::ui::form::{Field, FieldSet};
use crate::ui::mvi::UiState;

pub const FIELD_USERNAME: usize = 0;
pub const FIELD_CODE: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivateState {
    pub fields: FieldSet,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ActivateState {
    fn default() -> Self {
        Self {
            fields: FieldSet::new(vec![Field::new("Username"), Field::new("Code")]),
            submitting: false,
            error: None,
        }
    }
}

impl UiState for ActivateState {}
