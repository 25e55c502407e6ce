use crate::repo::ApiCall;
use crate::ui::effect::UiEffect;
use crate::ui::forgot::intent::ForgotIntent;
use crate::ui::forgot::state::{ForgotState, FIELD_EMAIL};
use crate::ui::mvi::{Reducer, Transition};
use crate::ui::nav::NavRequest;
use crate::validate;

pub struct ForgotReducer;

impl Reducer for ForgotReducer {
    type State = ForgotState;
    type Intent = ForgotIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            ForgotIntent::Enter => Transition::none(ForgotState::default()),
            ForgotIntent::Input(c) => {
                let mut next = state;
                next.fields.insert_char(c);
                next.error = None;
                Transition::none(next)
            }
            ForgotIntent::Backspace => {
                let mut next = state;
                next.fields.backspace();
                Transition::none(next)
            }
            ForgotIntent::Submit => {
                if state.submitting {
                    return Transition::none(state);
                }
                let mut next = state;
                next.fields.clear_errors();
                next.error = None;
                if !next.fields.check(FIELD_EMAIL, validate::email) {
                    return Transition::none(next);
                }
                next.submitting = true;
                let call = ApiCall::ForgotPassword {
                    email: next.fields.value(FIELD_EMAIL).to_string(),
                };
                Transition::one(next, UiEffect::Api(call))
            }
            ForgotIntent::Finished(Ok(())) => {
                let mut next = state;
                next.submitting = false;
                Transition::many(
                    next,
                    vec![
                        UiEffect::Toast("Password reset email sent".to_string()),
                        UiEffect::Navigate(NavRequest::Back),
                    ],
                )
            }
            ForgotIntent::Finished(Err(message)) => {
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
    fn submit_validates_email_first() {
        let mut state = ForgotState::default();
        state.fields.set_value(FIELD_EMAIL, "not-an-email".to_string());
        let transition = ForgotReducer::reduce(state, ForgotIntent::Submit);
        assert!(transition.effects.is_empty());
        assert!(transition.state.fields.has_errors());
    }

    #[test]
    fn submit_queues_reset_request() {
        let mut state = ForgotState::default();
        state.fields.set_value(FIELD_EMAIL, "a@b.com".to_string());
        let transition = ForgotReducer::reduce(state, ForgotIntent::Submit);
        assert!(transition.state.submitting);
        match &transition.effects[..] {
            [UiEffect::Api(ApiCall::ForgotPassword { email })] => assert_eq!(email, "a@b.com"),
            other => panic!("Expected forgot call, got {:?}", other),
        }
    }

    #[test]
    fn success_toasts_and_goes_back() {
        let mut state = ForgotState::default();
        state.submitting = true;
        let transition = ForgotReducer::reduce(state, ForgotIntent::Finished(Ok(())));
        assert!(matches!(
            transition.effects[..],
            [UiEffect::Toast(_), UiEffect::Navigate(NavRequest::Back)]
        ));
    }
}
