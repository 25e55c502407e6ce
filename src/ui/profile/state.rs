use crate::model::User;
use crate::ui::form::{Field, FieldSet};
use crate::ui::mvi::UiState;

pub const FIELD_NICKNAME: usize = 0;
pub const FIELD_EMAIL: usize = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    pub user: Option<User>,
    pub fields: FieldSet,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            user: None,
            fields: FieldSet::new(vec![Field::new("Nickname"), Field::new("Email")]),
            loading: false,
            submitting: false,
            error: None,
        }
    }
}

impl UiState for ProfileState {}
