use crate::model::Captcha;
use crate::ui::form::{Field, FieldSet};
use crate::ui::mvi::UiState;

pub const FIELD_USERNAME: usize = 0;
pub const FIELD_PASSWORD: usize = 1;
pub const FIELD_CODE: usize = 2;

/// Lifecycle of the captcha challenge shown next to the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CaptchaState {
    #[default]
    Missing,
    Loading,
    Ready(Captcha),
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginState {
    pub fields: FieldSet,
    pub captcha: CaptchaState,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            fields: FieldSet::new(vec![
                Field::new("Username"),
                Field::secret("Password"),
                Field::new("Captcha code"),
            ]),
            captcha: CaptchaState::Missing,
            submitting: false,
            error: None,
        }
    }
}

impl UiState for LoginState {}
