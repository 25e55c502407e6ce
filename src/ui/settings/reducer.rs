use crate::model::AgreementKind;
use crate::repo::ApiCall;
use crate::ui::effect::UiEffect;
use crate::ui::mvi::{Reducer, Transition};
use crate::ui::nav::{NavRequest, Screen};
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{
    SettingsState, ENTRY_COUNT, ENTRY_PRIVACY, ENTRY_SIGN_OUT, ENTRY_TERMS,
};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            SettingsIntent::Enter => Transition::none(SettingsState::default()),
            SettingsIntent::MoveUp => {
                let mut next = state;
                next.selected = if next.selected == 0 {
                    ENTRY_COUNT - 1
                } else {
                    next.selected - 1
                };
                next.confirm_logout = false;
                Transition::none(next)
            }
            SettingsIntent::MoveDown => {
                let mut next = state;
                next.selected = (next.selected + 1) % ENTRY_COUNT;
                next.confirm_logout = false;
                Transition::none(next)
            }
            SettingsIntent::Activate => {
                if state.busy {
                    return Transition::none(state);
                }
                match state.selected {
                    ENTRY_TERMS => Transition::one(
                        state,
                        UiEffect::Navigate(NavRequest::Push(Screen::Agreement {
                            kind: AgreementKind::UserTerms,
                            consent: false,
                        })),
                    ),
                    ENTRY_PRIVACY => Transition::one(
                        state,
                        UiEffect::Navigate(NavRequest::Push(Screen::Agreement {
                            kind: AgreementKind::Privacy,
                            consent: false,
                        })),
                    ),
                    ENTRY_SIGN_OUT => {
                        let mut next = state;
                        if next.confirm_logout {
                            next.busy = true;
                            Transition::one(next, UiEffect::Api(ApiCall::Logout))
                        } else {
                            next.confirm_logout = true;
                            Transition::none(next)
                        }
                    }
                    _ => Transition::none(state),
                }
            }
            // Drop the session locally whatever the server said.
            SettingsIntent::LogoutFinished(_) => {
                let mut next = state;
                next.busy = false;
                next.confirm_logout = false;
                Transition::one(next, UiEffect::Logout)
            }
        }
    }
}
