use chrono::{Local, NaiveDateTime, TimeZone};

use crate::money::parse_minor;
use crate::repo::{ApiCall, BillDraft};
use crate::ui::bill_form::intent::BillFormIntent;
use crate::ui::bill_form::state::{BillFocus, BillFormState, FIELD_AMOUNT, FIELD_DATE, FIELD_REMARK};
use crate::ui::effect::UiEffect;
use crate::ui::mvi::{Reducer, Transition};
use crate::ui::nav::NavRequest;

pub struct BillFormReducer;

impl Reducer for BillFormReducer {
    type State = BillFormState;
    type Intent = BillFormIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            BillFormIntent::Enter => {
                let mut next = BillFormState::default();
                next.loading = true;
                next.fields.set_value(
                    FIELD_DATE,
                    Local::now().format("%Y-%m-%d %H:%M").to_string(),
                );
                Transition::many(
                    next,
                    vec![
                        UiEffect::Api(ApiCall::FetchPayTypes),
                        UiEffect::Api(ApiCall::FetchAccounts),
                    ],
                )
            }
            BillFormIntent::Input(c) => {
                let mut next = state;
                if next.focus.field_index().is_some() {
                    next.fields.insert_char(c);
                    next.error = None;
                }
                Transition::none(next)
            }
            BillFormIntent::Backspace => {
                let mut next = state;
                if next.focus.field_index().is_some() {
                    next.fields.backspace();
                }
                Transition::none(next)
            }
            BillFormIntent::FocusNext => Transition::none(refocus(state, BillFocus::next)),
            BillFormIntent::FocusPrev => Transition::none(refocus(state, BillFocus::prev)),
            BillFormIntent::CycleLeft => Transition::none(cycle(state, -1)),
            BillFormIntent::CycleRight => Transition::none(cycle(state, 1)),
            BillFormIntent::PayTypesLoaded(Ok(pay_types)) => {
                let mut next = state;
                next.pay_types = pay_types;
                next.pay_type_index = 0;
                next.loading = false;
                Transition::none(next)
            }
            BillFormIntent::PayTypesLoaded(Err(message)) => {
                let mut next = state;
                next.loading = false;
                next.error = Some(message);
                Transition::none(next)
            }
            BillFormIntent::AccountsLoaded(Ok(accounts)) => {
                let mut next = state;
                next.accounts = accounts;
                next.account_index = 0;
                Transition::none(next)
            }
            BillFormIntent::AccountsLoaded(Err(message)) => {
                let mut next = state;
                next.error = Some(message);
                Transition::none(next)
            }
            BillFormIntent::Submit => {
                if state.submitting {
                    return Transition::none(state);
                }
                let mut next = state;
                next.fields.clear_errors();
                next.error = None;

                let amount_minor = match parse_minor(next.fields.value(FIELD_AMOUNT)) {
                    Some(v) if v > 0 => Some(v),
                    _ => {
                        next.fields
                            .set_error(FIELD_AMOUNT, "Enter an amount like 12.50");
                        None
                    }
                };
                let happened_at = match parse_local(next.fields.value(FIELD_DATE)) {
                    Some(ts) => Some(ts),
                    None => {
                        next.fields.set_error(FIELD_DATE, "Use YYYY-MM-DD HH:MM");
                        None
                    }
                };
                let (amount_minor, happened_at) = match (amount_minor, happened_at) {
                    (Some(amount), Some(ts)) => (amount, ts),
                    _ => {
                        focus_first_error(&mut next);
                        return Transition::none(next);
                    }
                };

                let pay_type_id = match next.selected_pay_type() {
                    Some(pay_type) => pay_type.id,
                    None => {
                        next.error =
                            Some("No category for this kind yet. Add one under Categories.".into());
                        next.focus = BillFocus::PayType;
                        return Transition::none(next);
                    }
                };

                let remark = next.fields.value(FIELD_REMARK).trim();
                let draft = BillDraft {
                    kind: next.kind,
                    amount_minor,
                    pay_type_id,
                    account_id: next.selected_account().map(|account| account.id),
                    remark: if remark.is_empty() {
                        None
                    } else {
                        Some(remark.to_string())
                    },
                    happened_at,
                };
                next.submitting = true;
                Transition::one(next, UiEffect::Api(ApiCall::CreateBill(draft)))
            }
            BillFormIntent::Finished(Ok(())) => {
                let mut next = state;
                next.submitting = false;
                Transition::many(
                    next,
                    vec![
                        UiEffect::Toast("Bill saved".to_string()),
                        UiEffect::Navigate(NavRequest::Back),
                    ],
                )
            }
            BillFormIntent::Finished(Err(message)) => {
                let mut next = state;
                next.submitting = false;
                next.error = Some(message);
                Transition::none(next)
            }
        }
    }
}

fn refocus(mut state: BillFormState, step: fn(BillFocus) -> BillFocus) -> BillFormState {
    state.focus = step(state.focus);
    if let Some(index) = state.focus.field_index() {
        state.fields.set_focus(index);
    }
    state
}

fn cycle(mut state: BillFormState, step: i64) -> BillFormState {
    match state.focus {
        BillFocus::Kind => {
            state.kind = state.kind.toggled();
            state.pay_type_index = 0;
        }
        BillFocus::PayType => {
            state.pay_type_index = step_index(state.pay_type_index, state.options().len(), step);
        }
        BillFocus::Account => {
            state.account_index = step_index(state.account_index, state.accounts.len(), step);
        }
        _ => {}
    }
    state
}

fn step_index(current: usize, len: usize, step: i64) -> usize {
    if len == 0 {
        return 0;
    }
    (current as i64 + step).rem_euclid(len as i64) as usize
}

fn focus_first_error(state: &mut BillFormState) {
    let fields = state.fields.fields();
    state.focus = if fields[FIELD_AMOUNT].error.is_some() {
        BillFocus::Amount
    } else if fields[FIELD_DATE].error.is_some() {
        BillFocus::Date
    } else {
        BillFocus::Remark
    };
    state.fields.focus_first_error();
}

fn parse_local(value: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M").ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
}
