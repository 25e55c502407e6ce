use crate::repo::ApiCall;
use crate::ui::agreement::intent::AgreementIntent;
use crate::ui::agreement::state::AgreementState;
use crate::ui::effect::UiEffect;
use crate::ui::mvi::{Reducer, Transition};
use crate::ui::nav::NavRequest;

const PAGE: u16 = 10;

pub struct AgreementReducer;

impl Reducer for AgreementReducer {
    type State = AgreementState;
    type Intent = AgreementIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            AgreementIntent::Enter { kind, consent } => {
                let mut next = AgreementState::default();
                next.kind = kind;
                next.consent = consent;
                next.loading = true;
                Transition::one(next, UiEffect::Api(ApiCall::FetchAgreement { kind }))
            }
            AgreementIntent::Loaded(Ok(doc)) => {
                let mut next = state;
                next.doc = Some(doc);
                next.scroll = 0;
                next.loading = false;
                Transition::none(next)
            }
            AgreementIntent::Loaded(Err(message)) => {
                let mut next = state;
                next.loading = false;
                next.error = Some(message);
                Transition::none(next)
            }
            AgreementIntent::ScrollUp => scroll_by(state, -1),
            AgreementIntent::ScrollDown => scroll_by(state, 1),
            AgreementIntent::PageUp => scroll_by(state, -(PAGE as i32)),
            AgreementIntent::PageDown => scroll_by(state, PAGE as i32),
            AgreementIntent::Accept => {
                if !state.consent {
                    return Transition::none(state);
                }
                Transition::many(
                    state,
                    vec![
                        UiEffect::AcceptConsent,
                        UiEffect::Navigate(NavRequest::Back),
                    ],
                )
            }
            AgreementIntent::Decline => {
                if !state.consent {
                    return Transition::none(state);
                }
                Transition::one(state, UiEffect::Quit)
            }
        }
    }
}

fn scroll_by(state: AgreementState, delta: i32) -> Transition<AgreementState, UiEffect> {
    let mut next = state;
    let max = next.max_scroll();
    let target = next.scroll as i32 + delta;
    next.scroll = target.clamp(0, max as i32) as u16;
    Transition::none(next)
}
