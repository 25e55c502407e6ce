use crate::repo::ApiCall;
use crate::ui::activate::intent::ActivateIntent;
use crate::ui::activate::state::{ActivateState, FIELD_CODE, FIELD_USERNAME};
use crate::ui::effect::UiEffect;
use crate::ui::mvi::{Reducer, Transition};
use crate::ui::nav::{NavRequest, Screen};
use crate::validate;

pub struct ActivateReducer;

impl Reducer for ActivateReducer {
    type State = ActivateState;
    type Intent = ActivateIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            ActivateIntent::Enter { username } => {
                let mut next = ActivateState::default();
                if let Some(username) = username {
                    next.fields.set_value(FIELD_USERNAME, username);
                    next.fields.set_focus(FIELD_CODE);
                }
                Transition::none(next)
            }
            ActivateIntent::Input(c) => {
                let mut next = state;
                next.fields.insert_char(c);
                next.error = None;
                Transition::none(next)
            }
            ActivateIntent::Backspace => {
                let mut next = state;
                next.fields.backspace();
                Transition::none(next)
            }
            ActivateIntent::FocusNext => {
                let mut next = state;
                next.fields.focus_next();
                Transition::none(next)
            }
            ActivateIntent::FocusPrev => {
                let mut next = state;
                next.fields.focus_prev();
                Transition::none(next)
            }
            ActivateIntent::Submit => {
                if state.submitting {
                    return Transition::none(state);
                }
                let mut next = state;
                next.fields.clear_errors();
                next.error = None;

                let mut ok = next.fields.check(FIELD_USERNAME, validate::username);
                ok &= next.fields.check(FIELD_CODE, validate::code);
                if !ok {
                    next.fields.focus_first_error();
                    return Transition::none(next);
                }

                next.submitting = true;
                let call = ApiCall::Activate {
                    username: next.fields.value(FIELD_USERNAME).to_string(),
                    code: next.fields.value(FIELD_CODE).to_string(),
                };
                Transition::one(next, UiEffect::Api(call))
            }
            ActivateIntent::Finished(Ok(())) => {
                let mut next = state;
                next.submitting = false;
                Transition::many(
                    next,
                    vec![
                        UiEffect::Toast("Account activated. You can sign in now.".to_string()),
                        UiEffect::Navigate(NavRequest::Reset(Screen::Login)),
                    ],
                )
            }
            ActivateIntent::Finished(Err(message)) => {
                let mut next = state;
                next.submitting = false;
                next.error = Some(message);
                Transition::none(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_prefills_username_and_focuses_code() {
        let transition = ActivateReducer::reduce(
            ActivateState::default(),
            ActivateIntent::Enter {
                username: Some("user123".to_string()),
            },
        );
        assert_eq!(transition.state.fields.value(FIELD_USERNAME), "user123");
        assert_eq!(transition.state.fields.focused(), FIELD_CODE);
    }

    #[test]
    fn submit_checks_code_shape() {
        let mut state = ActivateState::default();
        state.fields.set_value(FIELD_USERNAME, "user123".to_string());
        state.fields.set_value(FIELD_CODE, "x".to_string());
        let transition = ActivateReducer::reduce(state, ActivateIntent::Submit);
        assert!(transition.effects.is_empty());
        assert!(transition.state.fields.has_errors());
    }

    #[test]
    fn success_resets_to_login() {
        let mut state = ActivateState::default();
        state.submitting = true;
        let transition = ActivateReducer::reduce(state, ActivateIntent::Finished(Ok(())));
        assert!(matches!(
            transition.effects[..],
            [
                UiEffect::Toast(_),
                UiEffect::Navigate(NavRequest::Reset(Screen::Login))
            ]
        ));
    }
}
