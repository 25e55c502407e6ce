use crate::model::{FlowKind, PayType};
use crate::ui::mvi::UiState;

/// What the category being edited will become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    NewRoot { kind: FlowKind },
    NewChild { parent_id: i64 },
    Rename { id: i64 },
}

/// What the keys currently mean on the categories screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayTypesMode {
    #[default]
    Browse,
    Edit(EditTarget),
    ConfirmDelete,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PayTypesState {
    /// Display order: each root followed by its children.
    pub pay_types: Vec<PayType>,
    pub selected: usize,
    /// Local reorder not yet pushed to the server.
    pub dirty: bool,
    pub mode: PayTypesMode,
    pub edit_value: String,
    pub edit_error: Option<&'static str>,
    pub loading: bool,
    /// A create, rename, sort or delete is in flight.
    pub busy: bool,
    pub error: Option<String>,
}

impl UiState for PayTypesState {}

impl PayTypesState {
    pub fn selected_entry(&self) -> Option<&PayType> {
        self.pay_types.get(self.selected)
    }

    /// Ids in display order, the payload for the sort endpoint.
    pub fn display_ids(&self) -> Vec<i64> {
        self.pay_types.iter().map(|pt| pt.id).collect()
    }

    pub fn has_children(&self, id: i64) -> bool {
        self.pay_types.iter().any(|pt| pt.parent_id == id)
    }
}

/// Reshapes a `(sort, id)`-ordered flat list into display order: roots
/// keep their relative order and each one pulls its children in behind
/// it. Entries whose parent is missing keep their place at the end.
pub fn arrange(pay_types: Vec<PayType>) -> Vec<PayType> {
    let mut out = Vec::with_capacity(pay_types.len());
    let mut placed = vec![false; pay_types.len()];

    for (root_idx, root) in pay_types.iter().enumerate() {
        if !root.is_root() {
            continue;
        }
        out.push(root.clone());
        placed[root_idx] = true;
        for (child_idx, child) in pay_types.iter().enumerate() {
            if child.parent_id == root.id {
                out.push(child.clone());
                placed[child_idx] = true;
            }
        }
    }
    for (idx, orphan) in pay_types.into_iter().enumerate() {
        if !placed[idx] {
            out.push(orphan);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pay_type(id: i64, parent_id: i64, sort: i32, name: &str) -> PayType {
        PayType {
            id,
            parent_id,
            name: name.to_string(),
            kind: FlowKind::Expense,
            sort,
        }
    }

    #[test]
    fn arrange_groups_children_under_roots() {
        let flat = vec![
            pay_type(1, 0, 1, "Food"),
            pay_type(2, 0, 2, "Transport"),
            pay_type(11, 1, 3, "Lunch"),
            pay_type(21, 2, 4, "Bus"),
            pay_type(12, 1, 5, "Dinner"),
        ];
        let names: Vec<String> = arrange(flat).into_iter().map(|pt| pt.name).collect();
        assert_eq!(names, ["Food", "Lunch", "Dinner", "Transport", "Bus"]);
    }

    #[test]
    fn arrange_keeps_orphans_at_the_end() {
        let flat = vec![pay_type(11, 99, 1, "Stray"), pay_type(1, 0, 2, "Food")];
        let names: Vec<String> = arrange(flat).into_iter().map(|pt| pt.name).collect();
        assert_eq!(names, ["Food", "Stray"]);
    }
}
