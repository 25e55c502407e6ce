use crate::model::Captcha;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    /// Screen became current: start over with a fresh captcha.
    Enter,
    Input(char),
    Backspace,
    FocusNext,
    FocusPrev,
    RefreshCaptcha,
    CaptchaLoaded(Result<Captcha, String>),
    Submit,
    /// The login call failed; a fresh captcha is fetched because the
    /// old code is spent either way.
    Failed {
        message: String,
    },
}

impl Intent for LoginIntent {}
