use crate::ui::form::{Field, FieldSet};
use crate::ui::mvi::UiState;

pub const FIELD_USERNAME: usize = 0;
pub const FIELD_NICKNAME: usize = 1;
pub const FIELD_EMAIL: usize = 2;
pub const FIELD_PASSWORD: usize = 3;
pub const FIELD_CONFIRM: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterState {
    pub fields: FieldSet,
    /// User agreement checkbox.
    pub terms_accepted: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self {
            fields: FieldSet::new(vec![
                Field::new("Username"),
                Field::new("Nickname"),
                Field::new("Email"),
                Field::secret("Password"),
                Field::secret("Confirm"),
            ]),
            terms_accepted: false,
            submitting: false,
            error: None,
        }
    }
}

impl UiState for RegisterState {}
