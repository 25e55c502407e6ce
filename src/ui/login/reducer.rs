use crate::repo::ApiCall;
use crate::ui::effect::UiEffect;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{CaptchaState, LoginState, FIELD_CODE, FIELD_PASSWORD, FIELD_USERNAME};
use crate::ui::mvi::{Reducer, Transition};
use crate::validate;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            LoginIntent::Enter => Transition::one(
                LoginState {
                    captcha: CaptchaState::Loading,
                    ..LoginState::default()
                },
                UiEffect::Api(ApiCall::FetchCaptcha),
            ),
            LoginIntent::Input(c) => {
                let mut next = state;
                next.fields.insert_char(c);
                next.error = None;
                Transition::none(next)
            }
            LoginIntent::Backspace => {
                let mut next = state;
                next.fields.backspace();
                Transition::none(next)
            }
            LoginIntent::FocusNext => {
                let mut next = state;
                next.fields.focus_next();
                Transition::none(next)
            }
            LoginIntent::FocusPrev => {
                let mut next = state;
                next.fields.focus_prev();
                Transition::none(next)
            }
            LoginIntent::RefreshCaptcha => {
                let mut next = state;
                next.captcha = CaptchaState::Loading;
                next.fields.set_value(FIELD_CODE, String::new());
                Transition::one(next, UiEffect::Api(ApiCall::FetchCaptcha))
            }
            LoginIntent::CaptchaLoaded(Ok(captcha)) => {
                let mut next = state;
                next.captcha = CaptchaState::Ready(captcha);
                Transition::none(next)
            }
            LoginIntent::CaptchaLoaded(Err(message)) => {
                let mut next = state;
                next.captcha = CaptchaState::Failed { message };
                Transition::none(next)
            }
            LoginIntent::Submit => {
                if state.submitting {
                    return Transition::none(state);
                }
                let mut next = state;
                next.fields.clear_errors();
                next.error = None;

                let mut ok = next.fields.check(FIELD_USERNAME, validate::username);
                ok &= next.fields.check(FIELD_PASSWORD, validate::password);
                ok &= next.fields.check(FIELD_CODE, validate::code);
                if !ok {
                    next.fields.focus_first_error();
                    return Transition::none(next);
                }

                let uuid = match &next.captcha {
                    CaptchaState::Ready(captcha) => captcha.uuid.clone(),
                    _ => {
                        next.error = Some("Captcha not ready yet. Press F5 to fetch one.".into());
                        return Transition::none(next);
                    }
                };

                next.submitting = true;
                let call = ApiCall::Login {
                    username: next.fields.value(FIELD_USERNAME).to_string(),
                    password: next.fields.value(FIELD_PASSWORD).to_string(),
                    code: next.fields.value(FIELD_CODE).to_string(),
                    uuid,
                };
                Transition::one(next, UiEffect::Api(call))
            }
            LoginIntent::Failed { message } => {
                let mut next = state;
                next.submitting = false;
                next.error = Some(message);
                next.captcha = CaptchaState::Loading;
                next.fields.set_value(FIELD_CODE, String::new());
                Transition::one(next, UiEffect::Api(ApiCall::FetchCaptcha))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Captcha;
    use std::path::PathBuf;

    fn make_captcha() -> Captcha {
        Captcha {
            uuid: "uuid-1".to_string(),
            image_path: PathBuf::from("/tmp/captcha.png"),
        }
    }

    fn ready_state() -> LoginState {
        let mut state = LoginState::default();
        for c in "user123".chars() {
            state.fields.insert_char(c);
        }
        state.fields.focus_next();
        for c in "abc12345".chars() {
            state.fields.insert_char(c);
        }
        state.fields.focus_next();
        for c in "ab12".chars() {
            state.fields.insert_char(c);
        }
        state.captcha = CaptchaState::Ready(make_captcha());
        state
    }

    #[test]
    fn enter_resets_and_fetches_captcha() {
        let dirty = ready_state();
        let transition = LoginReducer::reduce(dirty, LoginIntent::Enter);
        assert_eq!(transition.state.fields.value(FIELD_USERNAME), "");
        assert_eq!(transition.state.captcha, CaptchaState::Loading);
        assert!(matches!(
            transition.effects[..],
            [UiEffect::Api(ApiCall::FetchCaptcha)]
        ));
    }

    #[test]
    fn submit_with_valid_input_queues_login() {
        let transition = LoginReducer::reduce(ready_state(), LoginIntent::Submit);
        assert!(transition.state.submitting);
        match &transition.effects[..] {
            [UiEffect::Api(ApiCall::Login { username, code, uuid, .. })] => {
                assert_eq!(username, "user123");
                assert_eq!(code, "ab12");
                assert_eq!(uuid, "uuid-1");
            }
            other => panic!("Expected login call, got {:?}", other),
        }
    }

    #[test]
    fn submit_flags_invalid_fields_without_a_call() {
        let mut state = ready_state();
        state.fields.set_value(FIELD_USERNAME, "abc".to_string());
        let transition = LoginReducer::reduce(state, LoginIntent::Submit);
        assert!(!transition.state.submitting);
        assert!(transition.effects.is_empty());
        assert!(transition.state.fields.has_errors());
        assert_eq!(transition.state.fields.focused(), FIELD_USERNAME);
    }

    #[test]
    fn submit_without_captcha_sets_screen_error() {
        let mut state = ready_state();
        state.captcha = CaptchaState::Missing;
        let transition = LoginReducer::reduce(state, LoginIntent::Submit);
        assert!(transition.effects.is_empty());
        assert!(transition.state.error.as_deref().unwrap_or("").contains("Captcha"));
    }

    #[test]
    fn failure_refreshes_captcha_and_clears_code() {
        let mut state = ready_state();
        state.submitting = true;
        let transition = LoginReducer::reduce(
            state,
            LoginIntent::Failed {
                message: "captcha mismatch".to_string(),
            },
        );
        assert!(!transition.state.submitting);
        assert_eq!(transition.state.error.as_deref(), Some("captcha mismatch"));
        assert_eq!(transition.state.captcha, CaptchaState::Loading);
        assert_eq!(transition.state.fields.value(FIELD_CODE), "");
        assert!(matches!(
            transition.effects[..],
            [UiEffect::Api(ApiCall::FetchCaptcha)]
        ));
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut state = ready_state();
        state.submitting = true;
        let transition = LoginReducer::reduce(state, LoginIntent::Submit);
        assert!(transition.effects.is_empty());
    }
}
