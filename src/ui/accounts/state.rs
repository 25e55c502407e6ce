use crate::model::{Account, AccountKind};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountsState {
    pub accounts: Vec<Account>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for AccountsState {}

impl AccountsState {
    /// Sum over all accounts, in minor units.
    pub fn total_minor(&self) -> i64 {
        self.accounts.iter().map(|a| a.balance_minor).sum()
    }

    /// Sum over the accounts of one kind, in minor units.
    pub fn kind_total_minor(&self, kind: AccountKind) -> i64 {
        self.accounts
            .iter()
            .filter(|a| a.kind == kind)
            .map(|a| a.balance_minor)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_account(id: i64, kind: AccountKind, balance_minor: i64) -> Account {
        Account {
            id,
            name: format!("acct-{id}"),
            kind,
            balance_minor,
            remark: None,
        }
    }

    #[test]
    fn totals_split_by_kind() {
        let state = AccountsState {
            accounts: vec![
                make_account(1, AccountKind::Electronic, 1200),
                make_account(2, AccountKind::Savings, 50000),
                make_account(3, AccountKind::Electronic, -300),
            ],
            ..AccountsState::default()
        };
        assert_eq!(state.total_minor(), 50900);
        assert_eq!(state.kind_total_minor(AccountKind::Electronic), 900);
        assert_eq!(state.kind_total_minor(AccountKind::Savings), 50000);
    }
}
