use crate::model::AgreementKind;
use crate::repo::ApiCall;
use crate::ui::effect::UiEffect;
use crate::ui::mvi::{Reducer, Transition};
use crate::ui::nav::{NavRequest, Screen};
use crate::ui::register::intent::RegisterIntent;
use crate::ui::register::state::{
    RegisterState, FIELD_CONFIRM, FIELD_EMAIL, FIELD_NICKNAME, FIELD_PASSWORD, FIELD_USERNAME,
};
use crate::validate;

pub struct RegisterReducer;

impl Reducer for RegisterReducer {
    type State = RegisterState;
    type Intent = RegisterIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            RegisterIntent::Enter => Transition::none(RegisterState::default()),
            RegisterIntent::Input(c) => {
                let mut next = state;
                next.fields.insert_char(c);
                next.error = None;
                Transition::none(next)
            }
            RegisterIntent::Backspace => {
                let mut next = state;
                next.fields.backspace();
                Transition::none(next)
            }
            RegisterIntent::FocusNext => {
                let mut next = state;
                next.fields.focus_next();
                Transition::none(next)
            }
            RegisterIntent::FocusPrev => {
                let mut next = state;
                next.fields.focus_prev();
                Transition::none(next)
            }
            RegisterIntent::ToggleTerms => {
                let mut next = state;
                next.terms_accepted = !next.terms_accepted;
                next.error = None;
                Transition::none(next)
            }
            RegisterIntent::ViewTerms => Transition::one(
                state,
                UiEffect::Navigate(NavRequest::Push(Screen::Agreement {
                    kind: AgreementKind::UserTerms,
                    consent: false,
                })),
            ),
            RegisterIntent::Submit => {
                if state.submitting {
                    return Transition::none(state);
                }
                let mut next = state;
                next.fields.clear_errors();
                next.error = None;

                let mut ok = next.fields.check(FIELD_USERNAME, validate::username);
                ok &= next.fields.check(FIELD_NICKNAME, validate::nickname);
                ok &= next.fields.check(FIELD_EMAIL, validate::email);
                ok &= next.fields.check(FIELD_PASSWORD, validate::password);
                let confirm_ok = validate::confirm_password(
                    next.fields.value(FIELD_PASSWORD),
                    next.fields.value(FIELD_CONFIRM),
                );
                if let Err(message) = confirm_ok {
                    next.fields.set_error(FIELD_CONFIRM, message);
                    ok = false;
                }
                if !ok {
                    next.fields.focus_first_error();
                    return Transition::none(next);
                }
                if let Err(message) = validate::terms(next.terms_accepted) {
                    next.error = Some(message.to_string());
                    return Transition::none(next);
                }

                next.submitting = true;
                let call = ApiCall::Register {
                    username: next.fields.value(FIELD_USERNAME).to_string(),
                    nick_name: next.fields.value(FIELD_NICKNAME).trim().to_string(),
                    email: next.fields.value(FIELD_EMAIL).to_string(),
                    password: next.fields.value(FIELD_PASSWORD).to_string(),
                };
                Transition::one(next, UiEffect::Api(call))
            }
            RegisterIntent::Finished(Ok(())) => {
                let mut next = state;
                next.submitting = false;
                Transition::many(
                    next,
                    vec![
                        UiEffect::Toast("Check your email for the activation code".to_string()),
                        UiEffect::Navigate(NavRequest::Push(Screen::Activate)),
                    ],
                )
            }
            RegisterIntent::Finished(Err(message)) => {
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

    fn filled_state() -> RegisterState {
        let mut state = RegisterState::default();
        state.fields.set_value(FIELD_USERNAME, "user123".to_string());
        state.fields.set_value(FIELD_NICKNAME, "Sam".to_string());
        state.fields.set_value(FIELD_EMAIL, "a@b.com".to_string());
        state.fields.set_value(FIELD_PASSWORD, "abc12345".to_string());
        state.fields.set_value(FIELD_CONFIRM, "abc12345".to_string());
        state.terms_accepted = true;
        state
    }

    #[test]
    fn submit_queues_register_call() {
        let transition = RegisterReducer::reduce(filled_state(), RegisterIntent::Submit);
        assert!(transition.state.submitting);
        match &transition.effects[..] {
            [UiEffect::Api(ApiCall::Register { username, email, .. })] => {
                assert_eq!(username, "user123");
                assert_eq!(email, "a@b.com");
            }
            other => panic!("Expected register call, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_confirm_blocks_submit() {
        let mut state = filled_state();
        state.fields.set_value(FIELD_CONFIRM, "abc12346".to_string());
        let transition = RegisterReducer::reduce(state, RegisterIntent::Submit);
        assert!(transition.effects.is_empty());
        assert_eq!(
            transition.state.fields.fields()[FIELD_CONFIRM].error,
            Some("Passwords do not match")
        );
    }

    #[test]
    fn unaccepted_terms_block_submit() {
        let mut state = filled_state();
        state.terms_accepted = false;
        let transition = RegisterReducer::reduce(state, RegisterIntent::Submit);
        assert!(transition.effects.is_empty());
        assert!(transition.state.error.is_some());
    }

    #[test]
    fn success_moves_on_to_activation() {
        let mut state = filled_state();
        state.submitting = true;
        let transition = RegisterReducer::reduce(state, RegisterIntent::Finished(Ok(())));
        assert!(!transition.state.submitting);
        assert!(matches!(
            transition.effects[..],
            [
                UiEffect::Toast(_),
                UiEffect::Navigate(NavRequest::Push(Screen::Activate))
            ]
        ));
    }

    #[test]
    fn view_terms_pushes_the_agreement_page() {
        let transition = RegisterReducer::reduce(RegisterState::default(), RegisterIntent::ViewTerms);
        assert!(matches!(
            transition.effects[..],
            [UiEffect::Navigate(NavRequest::Push(Screen::Agreement {
                kind: AgreementKind::UserTerms,
                consent: false,
            }))]
        ));
    }
}
