use crate::repo::ApiCall;
use crate::ui::effect::UiEffect;
use crate::ui::mvi::{Reducer, Transition};
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::{ProfileState, FIELD_EMAIL, FIELD_NICKNAME};
use crate::validate;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            ProfileIntent::Enter => {
                let mut next = ProfileState::default();
                next.loading = true;
                Transition::one(next, UiEffect::Api(ApiCall::FetchUser))
            }
            ProfileIntent::Refresh => {
                let mut next = state;
                next.loading = true;
                next.error = None;
                Transition::one(next, UiEffect::Api(ApiCall::FetchUser))
            }
            ProfileIntent::Loaded(Ok(user)) => {
                let mut next = state;
                next.fields
                    .set_value(FIELD_NICKNAME, user.nick_name.clone());
                next.fields
                    .set_value(FIELD_EMAIL, user.email.clone().unwrap_or_default());
                next.user = Some(user);
                next.loading = false;
                Transition::none(next)
            }
            ProfileIntent::Loaded(Err(message)) => {
                let mut next = state;
                next.loading = false;
                next.error = Some(message);
                Transition::none(next)
            }
            ProfileIntent::Input(c) => {
                let mut next = state;
                next.fields.insert_char(c);
                next.error = None;
                Transition::none(next)
            }
            ProfileIntent::Backspace => {
                let mut next = state;
                next.fields.backspace();
                Transition::none(next)
            }
            ProfileIntent::FocusNext => {
                let mut next = state;
                next.fields.focus_next();
                Transition::none(next)
            }
            ProfileIntent::FocusPrev => {
                let mut next = state;
                next.fields.focus_prev();
                Transition::none(next)
            }
            ProfileIntent::Submit => {
                if state.submitting {
                    return Transition::none(state);
                }
                let mut next = state;
                next.fields.clear_errors();
                next.error = None;

                let mut ok = next.fields.check(FIELD_NICKNAME, validate::nickname);
                ok &= next.fields.check(FIELD_EMAIL, validate::email);
                if !ok {
                    next.fields.focus_first_error();
                    return Transition::none(next);
                }

                next.submitting = true;
                let call = ApiCall::SaveProfile {
                    nick_name: next.fields.value(FIELD_NICKNAME).trim().to_string(),
                    email: next.fields.value(FIELD_EMAIL).trim().to_string(),
                };
                Transition::one(next, UiEffect::Api(call))
            }
            ProfileIntent::Finished(Ok(())) => {
                let mut next = state;
                next.submitting = false;
                if let Some(user) = next.user.as_mut() {
                    user.nick_name = next.fields.value(FIELD_NICKNAME).trim().to_string();
                    user.email = Some(next.fields.value(FIELD_EMAIL).trim().to_string());
                }
                Transition::one(next, UiEffect::Toast("Profile saved".to_string()))
            }
            ProfileIntent::Finished(Err(message)) => {
                let mut next = state;
                next.submitting = false;
                next.error = Some(message);
                Transition::none(next)
            }
        }
    }
}
