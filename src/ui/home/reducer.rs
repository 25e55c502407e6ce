use crate::model::Month;
use crate::repo::ApiCall;
use crate::ui::effect::UiEffect;
use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::{Reducer, Transition};

pub struct HomeReducer;

impl HomeReducer {
    fn fetch(mut state: HomeState) -> Transition<HomeState, UiEffect> {
        state.loading = true;
        state.error = None;
        let month = state.month;
        Transition::one(state, UiEffect::Api(ApiCall::FetchBills { month }))
    }
}

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            HomeIntent::Enter { current } => {
                let mut next = state;
                if next.month == Month::default() {
                    next.month = current;
                }
                Self::fetch(next)
            }
            HomeIntent::PrevMonth => {
                let mut next = state;
                next.month = next.month.prev();
                next.selected = 0;
                Self::fetch(next)
            }
            HomeIntent::NextMonth => {
                let mut next = state;
                next.month = next.month.next();
                next.selected = 0;
                Self::fetch(next)
            }
            HomeIntent::Refresh => Self::fetch(state),
            HomeIntent::Loaded(Ok(bills)) => {
                let mut next = state;
                next.loading = false;
                next.error = None;
                next.selected = next.selected.min(bills.len().saturating_sub(1));
                next.bills = bills;
                Transition::none(next)
            }
            HomeIntent::Loaded(Err(message)) => {
                let mut next = state;
                next.loading = false;
                next.error = Some(message);
                Transition::none(next)
            }
            HomeIntent::SelectUp => {
                let mut next = state;
                next.selected = next.selected.saturating_sub(1);
                Transition::none(next)
            }
            HomeIntent::SelectDown => {
                let mut next = state;
                if next.selected + 1 < next.bills.len() {
                    next.selected += 1;
                }
                Transition::none(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bill, FlowKind};

    fn make_bill(id: i64) -> Bill {
        Bill {
            id,
            kind: FlowKind::Expense,
            amount_minor: 100,
            pay_type_id: 1,
            pay_type_name: "Food".to_string(),
            account_id: None,
            account_name: None,
            remark: None,
            image: None,
            happened_at: id,
        }
    }

    fn aug() -> Month {
        Month {
            year: 2026,
            month: 8,
        }
    }

    #[test]
    fn first_enter_uses_the_current_month() {
        let transition = HomeReducer::reduce(HomeState::default(), HomeIntent::Enter { current: aug() });
        assert_eq!(transition.state.month, aug());
        assert!(transition.state.loading);
        assert!(matches!(
            transition.effects[..],
            [UiEffect::Api(ApiCall::FetchBills { month })] if month == aug()
        ));
    }

    #[test]
    fn later_enters_keep_the_chosen_month() {
        let mut state = HomeState::default();
        state.month = Month {
            year: 2026,
            month: 3,
        };
        let transition = HomeReducer::reduce(state, HomeIntent::Enter { current: aug() });
        assert_eq!(
            transition.state.month,
            Month {
                year: 2026,
                month: 3
            }
        );
    }

    #[test]
    fn month_keys_refetch() {
        let mut state = HomeState::default();
        state.month = aug();
        state.selected = 4;
        let transition = HomeReducer::reduce(state, HomeIntent::PrevMonth);
        assert_eq!(
            transition.state.month,
            Month {
                year: 2026,
                month: 7
            }
        );
        assert_eq!(transition.state.selected, 0);
        assert!(matches!(
            transition.effects[..],
            [UiEffect::Api(ApiCall::FetchBills { .. })]
        ));
    }

    #[test]
    fn loaded_clamps_the_selection() {
        let mut state = HomeState::default();
        state.selected = 9;
        state.loading = true;
        let transition = HomeReducer::reduce(
            state,
            HomeIntent::Loaded(Ok(vec![make_bill(1), make_bill(2)])),
        );
        assert!(!transition.state.loading);
        assert_eq!(transition.state.selected, 1);
        assert_eq!(transition.state.bills.len(), 2);
    }

    #[test]
    fn load_failure_keeps_old_bills() {
        let mut state = HomeState::default();
        state.bills = vec![make_bill(1)];
        let transition =
            HomeReducer::reduce(state, HomeIntent::Loaded(Err("boom".to_string())));
        assert_eq!(transition.state.bills.len(), 1);
        assert_eq!(transition.state.error.as_deref(), Some("boom"));
    }
}
