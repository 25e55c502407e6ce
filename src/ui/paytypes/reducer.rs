use crate::model::PayType;
use crate::repo::ApiCall;
use crate::ui::effect::UiEffect;
use crate::ui::mvi::{Reducer, Transition};
use crate::ui::paytypes::intent::PayTypesIntent;
use crate::ui::paytypes::state::{arrange, EditTarget, PayTypesMode, PayTypesState};
use crate::validate;

pub struct PayTypesReducer;

impl Reducer for PayTypesReducer {
    type State = PayTypesState;
    type Intent = PayTypesIntent;
    type Effect = UiEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect> {
        match intent {
            PayTypesIntent::Enter => {
                let mut next = PayTypesState::default();
                next.loading = true;
                Transition::one(next, UiEffect::Api(ApiCall::FetchPayTypes))
            }
            PayTypesIntent::Refresh => {
                let mut next = state;
                next.loading = true;
                next.error = None;
                Transition::one(next, UiEffect::Api(ApiCall::FetchPayTypes))
            }
            PayTypesIntent::Loaded(Ok(pay_types)) => {
                let mut next = state;
                next.pay_types = arrange(pay_types);
                next.selected = next
                    .selected
                    .min(next.pay_types.len().saturating_sub(1));
                next.loading = false;
                next.dirty = false;
                Transition::none(next)
            }
            PayTypesIntent::Loaded(Err(message)) => {
                let mut next = state;
                next.loading = false;
                next.error = Some(message);
                Transition::none(next)
            }
            PayTypesIntent::SelectUp => {
                let mut next = state;
                next.selected = next.selected.saturating_sub(1);
                Transition::none(next)
            }
            PayTypesIntent::SelectDown => {
                let mut next = state;
                next.selected = (next.selected + 1).min(next.pay_types.len().saturating_sub(1));
                Transition::none(next)
            }
            PayTypesIntent::MoveUp => {
                let mut next = state;
                move_up(&mut next);
                Transition::none(next)
            }
            PayTypesIntent::MoveDown => {
                let mut next = state;
                move_down(&mut next);
                Transition::none(next)
            }
            PayTypesIntent::SaveOrder => {
                if !state.dirty || state.busy {
                    return Transition::none(state);
                }
                let mut next = state;
                next.busy = true;
                let ids = next.display_ids();
                Transition::one(next, UiEffect::Api(ApiCall::SortPayTypes { ids }))
            }
            PayTypesIntent::BeginCreateChild => {
                if state.busy {
                    return Transition::none(state);
                }
                let mut next = state;
                let target = match next.selected_entry() {
                    Some(entry) => EditTarget::NewChild {
                        parent_id: if entry.is_root() {
                            entry.id
                        } else {
                            entry.parent_id
                        },
                    },
                    None => EditTarget::NewRoot {
                        kind: Default::default(),
                    },
                };
                next.mode = PayTypesMode::Edit(target);
                next.edit_value.clear();
                next.edit_error = None;
                Transition::none(next)
            }
            PayTypesIntent::BeginCreateRoot => {
                if state.busy {
                    return Transition::none(state);
                }
                let mut next = state;
                let kind = next
                    .selected_entry()
                    .map(|entry| entry.kind)
                    .unwrap_or_default();
                next.mode = PayTypesMode::Edit(EditTarget::NewRoot { kind });
                next.edit_value.clear();
                next.edit_error = None;
                Transition::none(next)
            }
            PayTypesIntent::BeginRename => {
                if state.busy {
                    return Transition::none(state);
                }
                let mut next = state;
                let target = match next.selected_entry() {
                    Some(entry) => (EditTarget::Rename { id: entry.id }, entry.name.clone()),
                    None => return Transition::none(next),
                };
                next.mode = PayTypesMode::Edit(target.0);
                next.edit_value = target.1;
                next.edit_error = None;
                Transition::none(next)
            }
            PayTypesIntent::BeginDelete => {
                if state.busy {
                    return Transition::none(state);
                }
                let mut next = state;
                match next.selected_entry() {
                    Some(entry) if entry.is_root() && next.has_children(entry.id) => {
                        next.error = Some("Delete or move its children first.".to_string());
                    }
                    Some(_) => {
                        next.mode = PayTypesMode::ConfirmDelete;
                        next.error = None;
                    }
                    None => {}
                }
                Transition::none(next)
            }
            PayTypesIntent::ConfirmDelete => {
                if state.mode != PayTypesMode::ConfirmDelete || state.busy {
                    return Transition::none(state);
                }
                let mut next = state;
                let id = match next.selected_entry() {
                    Some(entry) => entry.id,
                    None => {
                        next.mode = PayTypesMode::Browse;
                        return Transition::none(next);
                    }
                };
                next.mode = PayTypesMode::Browse;
                next.busy = true;
                Transition::one(next, UiEffect::Api(ApiCall::DeletePayType { id }))
            }
            PayTypesIntent::Cancel => {
                let mut next = state;
                next.mode = PayTypesMode::Browse;
                next.edit_value.clear();
                next.edit_error = None;
                Transition::none(next)
            }
            PayTypesIntent::Input(c) => {
                let mut next = state;
                if matches!(next.mode, PayTypesMode::Edit(_)) && !c.is_control() {
                    next.edit_value.push(c);
                    next.edit_error = None;
                }
                Transition::none(next)
            }
            PayTypesIntent::Backspace => {
                let mut next = state;
                if matches!(next.mode, PayTypesMode::Edit(_)) {
                    next.edit_value.pop();
                    next.edit_error = None;
                }
                Transition::none(next)
            }
            PayTypesIntent::ToggleKind => {
                let mut next = state;
                if let PayTypesMode::Edit(EditTarget::NewRoot { kind }) = next.mode {
                    next.mode = PayTypesMode::Edit(EditTarget::NewRoot {
                        kind: kind.toggled(),
                    });
                }
                Transition::none(next)
            }
            PayTypesIntent::Submit => {
                let target = match state.mode {
                    PayTypesMode::Edit(target) if !state.busy => target,
                    _ => return Transition::none(state),
                };
                let mut next = state;
                let name = next.edit_value.trim().to_string();
                if let Err(message) = validate::label(&name) {
                    next.edit_error = Some(message);
                    return Transition::none(next);
                }

                let call = match target {
                    EditTarget::NewRoot { kind } => ApiCall::CreatePayType {
                        name,
                        parent_id: 0,
                        kind,
                    },
                    EditTarget::NewChild { parent_id } => {
                        let kind = next
                            .pay_types
                            .iter()
                            .find(|pt| pt.id == parent_id)
                            .map(|pt| pt.kind)
                            .unwrap_or_default();
                        ApiCall::CreatePayType {
                            name,
                            parent_id,
                            kind,
                        }
                    }
                    EditTarget::Rename { id } => ApiCall::RenamePayType { id, name },
                };
                next.busy = true;
                Transition::one(next, UiEffect::Api(call))
            }
            PayTypesIntent::Mutated {
                result: Ok(()),
                toast,
            } => {
                let mut next = state;
                next.busy = false;
                next.mode = PayTypesMode::Browse;
                next.edit_value.clear();
                next.edit_error = None;
                next.dirty = false;
                next.loading = true;
                Transition::many(
                    next,
                    vec![
                        UiEffect::Toast(toast.to_string()),
                        UiEffect::Api(ApiCall::FetchPayTypes),
                    ],
                )
            }
            PayTypesIntent::Mutated {
                result: Err(message),
                ..
            } => {
                let mut next = state;
                next.busy = false;
                next.error = Some(message);
                Transition::none(next)
            }
        }
    }
}

/// End of the block starting at root index `start`, exclusive.
fn block_end(list: &[PayType], start: usize) -> usize {
    let mut end = start + 1;
    while end < list.len() && !list[end].is_root() {
        end += 1;
    }
    end
}

fn move_up(state: &mut PayTypesState) {
    let i = state.selected;
    if i == 0 || i >= state.pay_types.len() {
        return;
    }
    if state.pay_types[i].is_root() {
        let mut p = i - 1;
        loop {
            if state.pay_types[p].is_root() {
                break;
            }
            if p == 0 {
                return;
            }
            p -= 1;
        }
        let end = block_end(&state.pay_types, i);
        let block: Vec<PayType> = state.pay_types.drain(i..end).collect();
        for (offset, item) in block.into_iter().enumerate() {
            state.pay_types.insert(p + offset, item);
        }
        state.selected = p;
        state.dirty = true;
    } else if !state.pay_types[i - 1].is_root()
        && state.pay_types[i - 1].parent_id == state.pay_types[i].parent_id
    {
        state.pay_types.swap(i - 1, i);
        state.selected = i - 1;
        state.dirty = true;
    }
}

fn move_down(state: &mut PayTypesState) {
    let i = state.selected;
    let len = state.pay_types.len();
    if i >= len {
        return;
    }
    if state.pay_types[i].is_root() {
        let end = block_end(&state.pay_types, i);
        if end >= len {
            return;
        }
        let next_end = block_end(&state.pay_types, end);
        let block: Vec<PayType> = state.pay_types.drain(i..end).collect();
        let target = i + (next_end - end);
        for (offset, item) in block.into_iter().enumerate() {
            state.pay_types.insert(target + offset, item);
        }
        state.selected = target;
        state.dirty = true;
    } else if i + 1 < len
        && !state.pay_types[i + 1].is_root()
        && state.pay_types[i + 1].parent_id == state.pay_types[i].parent_id
    {
        state.pay_types.swap(i, i + 1);
        state.selected = i + 1;
        state.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FlowKind;

    fn pay_type(id: i64, parent_id: i64, sort: i32, name: &str) -> PayType {
        PayType {
            id,
            parent_id,
            name: name.to_string(),
            kind: FlowKind::Expense,
            sort,
        }
    }

    /// Food(1) > Lunch(11), Dinner(12); Transport(2) > Bus(21)
    fn arranged_state() -> PayTypesState {
        let mut state = PayTypesState::default();
        state.pay_types = arrange(vec![
            pay_type(1, 0, 1, "Food"),
            pay_type(2, 0, 2, "Transport"),
            pay_type(11, 1, 3, "Lunch"),
            pay_type(12, 1, 4, "Dinner"),
            pay_type(21, 2, 5, "Bus"),
        ]);
        state
    }

    fn names(state: &PayTypesState) -> Vec<&str> {
        state.pay_types.iter().map(|pt| pt.name.as_str()).collect()
    }

    #[test]
    fn loaded_arranges_and_clamps_selection() {
        let mut state = PayTypesState::default();
        state.selected = 10;
        state.loading = true;
        let transition = PayTypesReducer::reduce(
            state,
            PayTypesIntent::Loaded(Ok(vec![
                pay_type(1, 0, 1, "Food"),
                pay_type(11, 1, 2, "Lunch"),
            ])),
        );
        assert_eq!(names(&transition.state), ["Food", "Lunch"]);
        assert_eq!(transition.state.selected, 1);
        assert!(!transition.state.loading);
    }

    #[test]
    fn child_swaps_with_its_sibling() {
        let mut state = arranged_state();
        state.selected = 1; // Lunch
        let transition = PayTypesReducer::reduce(state, PayTypesIntent::MoveDown);
        assert_eq!(
            names(&transition.state),
            ["Food", "Dinner", "Lunch", "Transport", "Bus"]
        );
        assert_eq!(transition.state.selected, 2);
        assert!(transition.state.dirty);
    }

    #[test]
    fn child_cannot_leave_its_root() {
        let mut state = arranged_state();
        state.selected = 2; // Dinner, last child of Food
        let transition = PayTypesReducer::reduce(state, PayTypesIntent::MoveDown);
        assert_eq!(
            names(&transition.state),
            ["Food", "Lunch", "Dinner", "Transport", "Bus"]
        );
        assert!(!transition.state.dirty);
    }

    #[test]
    fn root_moves_with_its_children() {
        let mut state = arranged_state();
        state.selected = 3; // Transport
        let transition = PayTypesReducer::reduce(state, PayTypesIntent::MoveUp);
        assert_eq!(
            names(&transition.state),
            ["Transport", "Bus", "Food", "Lunch", "Dinner"]
        );
        assert_eq!(transition.state.selected, 0);
        assert!(transition.state.dirty);
    }

    #[test]
    fn save_order_sends_display_ids() {
        let mut state = arranged_state();
        state.selected = 1;
        let state = PayTypesReducer::reduce(state, PayTypesIntent::MoveDown).state;
        let transition = PayTypesReducer::reduce(state, PayTypesIntent::SaveOrder);
        assert!(transition.state.busy);
        match &transition.effects[..] {
            [UiEffect::Api(ApiCall::SortPayTypes { ids })] => {
                assert_eq!(ids, &[1, 12, 11, 2, 21]);
            }
            other => panic!("Expected sort call, got {:?}", other),
        }
    }

    #[test]
    fn save_order_without_changes_is_a_noop() {
        let transition = PayTypesReducer::reduce(arranged_state(), PayTypesIntent::SaveOrder);
        assert!(transition.effects.is_empty());
        assert!(!transition.state.busy);
    }

    #[test]
    fn deleting_a_root_with_children_is_refused() {
        let mut state = arranged_state();
        state.selected = 0; // Food
        let transition = PayTypesReducer::reduce(state, PayTypesIntent::BeginDelete);
        assert_eq!(transition.state.mode, PayTypesMode::Browse);
        assert!(transition
            .state
            .error
            .as_deref()
            .unwrap_or("")
            .contains("children"));
    }

    #[test]
    fn deleting_a_leaf_asks_then_calls() {
        let mut state = arranged_state();
        state.selected = 4; // Bus
        let state = PayTypesReducer::reduce(state, PayTypesIntent::BeginDelete).state;
        assert_eq!(state.mode, PayTypesMode::ConfirmDelete);

        let transition = PayTypesReducer::reduce(state, PayTypesIntent::ConfirmDelete);
        assert!(transition.state.busy);
        assert_eq!(transition.state.mode, PayTypesMode::Browse);
        assert!(matches!(
            transition.effects[..],
            [UiEffect::Api(ApiCall::DeletePayType { id: 21 })]
        ));
    }

    #[test]
    fn rename_prefills_and_validates() {
        let mut state = arranged_state();
        state.selected = 1; // Lunch
        let mut state = PayTypesReducer::reduce(state, PayTypesIntent::BeginRename).state;
        assert_eq!(state.edit_value, "Lunch");

        state.edit_value.clear();
        let state = PayTypesReducer::reduce(state, PayTypesIntent::Submit).state;
        assert!(state.edit_error.is_some());
        assert!(matches!(state.mode, PayTypesMode::Edit(_)));
    }

    #[test]
    fn rename_submits_the_trimmed_name() {
        let mut state = arranged_state();
        state.selected = 1; // Lunch
        let mut state = PayTypesReducer::reduce(state, PayTypesIntent::BeginRename).state;
        state.edit_value = " Brunch ".to_string();
        let transition = PayTypesReducer::reduce(state, PayTypesIntent::Submit);
        assert!(transition.state.busy);
        match &transition.effects[..] {
            [UiEffect::Api(ApiCall::RenamePayType { id: 11, name })] => {
                assert_eq!(name, "Brunch");
            }
            other => panic!("Expected rename call, got {:?}", other),
        }
    }

    #[test]
    fn new_child_inherits_the_parent_kind() {
        let mut state = arranged_state();
        state.selected = 2; // Dinner, child of Food
        let mut state = PayTypesReducer::reduce(state, PayTypesIntent::BeginCreateChild).state;
        assert_eq!(
            state.mode,
            PayTypesMode::Edit(EditTarget::NewChild { parent_id: 1 })
        );
        state.edit_value = "Snacks".to_string();
        let transition = PayTypesReducer::reduce(state, PayTypesIntent::Submit);
        match &transition.effects[..] {
            [UiEffect::Api(ApiCall::CreatePayType {
                name,
                parent_id: 1,
                kind: FlowKind::Expense,
            })] => assert_eq!(name, "Snacks"),
            other => panic!("Expected create call, got {:?}", other),
        }
    }

    #[test]
    fn mutation_ok_toasts_and_refetches() {
        let mut state = arranged_state();
        state.busy = true;
        state.dirty = true;
        let transition = PayTypesReducer::reduce(
            state,
            PayTypesIntent::Mutated {
                result: Ok(()),
                toast: "Order saved",
            },
        );
        assert!(!transition.state.busy);
        assert!(!transition.state.dirty);
        assert!(transition.state.loading);
        match &transition.effects[..] {
            [UiEffect::Toast(message), UiEffect::Api(ApiCall::FetchPayTypes)] => {
                assert_eq!(message, "Order saved");
            }
            other => panic!("Expected toast and refetch, got {:?}", other),
        }
    }
}
