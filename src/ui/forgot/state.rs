use crate::ui::form::{Field, FieldSet};
use crate::ui::mvi::UiState;

pub const FIELD_EMAIL: usize = 0;

#[derive(Debug, Clone, PartialEq)]
pub struct ForgotState {
    pub fields: FieldSet,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ForgotState {
    fn default() -> Self {
        Self {
            fields: FieldSet::new(vec![Field::new("Email")]),
            submitting: false,
            error: None,
        }
    }
}

impl UiState for ForgotState {}
