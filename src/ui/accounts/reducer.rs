use crate::repo::ApiCall;
use crate::ui::accounts::intent::AccountsIntent;
use crate::ui::accounts::state::AccountsState;
use crate::ui::effect::UiEffect;
use crate::ui::mvi::{Reducer, Transition};

pub struct AccountsReducer;

impl Reducer for AccountsReducer {
    type State = AccountsState;
    type Intent = AccountsIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            AccountsIntent::Enter => {
                let mut next = AccountsState::default();
                next.loading = true;
                Transition::one(next, UiEffect::Api(ApiCall::FetchAccounts))
            }
            AccountsIntent::Refresh => {
                let mut next = state;
                next.loading = true;
                next.error = None;
                Transition::one(next, UiEffect::Api(ApiCall::FetchAccounts))
            }
            AccountsIntent::Loaded(Ok(accounts)) => {
                let mut next = state;
                next.accounts = accounts;
                next.selected = next.selected.min(next.accounts.len().saturating_sub(1));
                next.loading = false;
                Transition::none(next)
            }
            AccountsIntent::Loaded(Err(message)) => {
                let mut next = state;
                next.loading = false;
                next.error = Some(message);
                Transition::none(next)
            }
            AccountsIntent::SelectUp => {
                let mut next = state;
                next.selected = next.selected.saturating_sub(1);
                Transition::none(next)
            }
            AccountsIntent::SelectDown => {
                let mut next = state;
                next.selected = (next.selected + 1).min(next.accounts.len().saturating_sub(1));
                Transition::none(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Account, AccountKind};

    fn account(id: i64, name: &str, balance_minor: i64) -> Account {
        Account {
            id,
            name: name.to_string(),
            kind: AccountKind::Electronic,
            balance_minor,
            remark: None,
        }
    }

    #[test]
    fn enter_fetches_the_list() {
        let transition = AccountsReducer::reduce(AccountsState::default(), AccountsIntent::Enter);
        assert!(transition.state.loading);
        assert!(matches!(
            transition.effects[..],
            [UiEffect::Api(ApiCall::FetchAccounts)]
        ));
    }

    #[test]
    fn loaded_clamps_selection_and_totals() {
        let mut state = AccountsState::default();
        state.selected = 5;
        let transition = AccountsReducer::reduce(
            state,
            AccountsIntent::Loaded(Ok(vec![
                account(1, "Cash", 10_00),
                account(2, "Card", -2_50),
            ])),
        );
        assert_eq!(transition.state.selected, 1);
        assert_eq!(transition.state.total_minor(), 750);
    }

    #[test]
    fn failure_keeps_the_old_list() {
        let mut state = AccountsState::default();
        state.accounts = vec![account(1, "Cash", 100)];
        let transition =
            AccountsReducer::reduce(state, AccountsIntent::Loaded(Err("offline".to_string())));
        assert_eq!(transition.state.accounts.len(), 1);
        assert_eq!(transition.state.error.as_deref(), Some("offline"));
    }
}
