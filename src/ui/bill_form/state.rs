use crate::model::{Account, FlowKind, PayType};
use crate::ui::form::{Field, FieldSet};
use crate::ui::mvi::UiState;

pub const FIELD_AMOUNT: usize = 0;
pub const FIELD_DATE: usize = 1;
pub const FIELD_REMARK: usize = 2;

/// Rows of the bill form, in tab order. Three of them are text fields,
/// the other three are choice rows driven by the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillFocus {
    #[default]
    Kind,
    Amount,
    Date,
    Remark,
    PayType,
    Account,
}

impl BillFocus {
    pub fn next(self) -> Self {
        match self {
            BillFocus::Kind => BillFocus::Amount,
            BillFocus::Amount => BillFocus::Date,
            BillFocus::Date => BillFocus::Remark,
            BillFocus::Remark => BillFocus::PayType,
            BillFocus::PayType => BillFocus::Account,
            BillFocus::Account => BillFocus::Kind,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            BillFocus::Kind => BillFocus::Account,
            BillFocus::Amount => BillFocus::Kind,
            BillFocus::Date => BillFocus::Amount,
            BillFocus::Remark => BillFocus::Date,
            BillFocus::PayType => BillFocus::Remark,
            BillFocus::Account => BillFocus::PayType,
        }
    }

    /// Index into the text fields, `None` for the choice rows.
    pub fn field_index(self) -> Option<usize> {
        match self {
            BillFocus::Amount => Some(FIELD_AMOUNT),
            BillFocus::Date => Some(FIELD_DATE),
            BillFocus::Remark => Some(FIELD_REMARK),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillFormState {
    pub kind: FlowKind,
    pub fields: FieldSet,
    pub focus: BillFocus,
    pub pay_types: Vec<PayType>,
    pub accounts: Vec<Account>,
    /// Index into [`options`](Self::options), not into `pay_types`.
    pub pay_type_index: usize,
    pub account_index: usize,
    pub loading: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for BillFormState {
    fn default() -> Self {
        Self {
            kind: FlowKind::Expense,
            fields: FieldSet::new(vec![
                Field::new("Amount"),
                Field::new("Date"),
                Field::new("Remark"),
            ]),
            focus: BillFocus::Kind,
            pay_types: Vec::new(),
            accounts: Vec::new(),
            pay_type_index: 0,
            account_index: 0,
            loading: false,
            submitting: false,
            error: None,
        }
    }
}

impl UiState for BillFormState {}

impl BillFormState {
    /// Categories a bill of the current kind can attach to: children in
    /// display order under each root, or the root itself when it has
    /// none.
    pub fn options(&self) -> Vec<&PayType> {
        let mut out = Vec::new();
        for root in self.pay_types.iter().filter(|pt| pt.is_root()) {
            let children: Vec<&PayType> = self
                .pay_types
                .iter()
                .filter(|pt| pt.parent_id == root.id)
                .collect();
            if children.is_empty() {
                if root.kind == self.kind {
                    out.push(root);
                }
            } else {
                out.extend(children.into_iter().filter(|pt| pt.kind == self.kind));
            }
        }
        out
    }

    pub fn selected_pay_type(&self) -> Option<&PayType> {
        self.options().get(self.pay_type_index).copied()
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.accounts.get(self.account_index)
    }
}
