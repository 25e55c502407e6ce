//! Domain entities as the rest of the app sees them.
//!
//! The wire DTOs in `api::types` are mapped into these before anything
//! else touches them, so screens never deal with optional fields the
//! server only sometimes sends.

use std::path::PathBuf;

use chrono::{Datelike, Local, TimeZone};

/// Direction of a bill or category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowKind {
    #[default]
    Expense,
    Income,
}

impl FlowKind {
    /// Wire code used by the ledger server: 1 = expense, 2 = income.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(FlowKind::Expense),
            2 => Some(FlowKind::Income),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            FlowKind::Expense => 1,
            FlowKind::Income => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowKind::Expense => "Expense",
            FlowKind::Income => "Income",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FlowKind::Expense => FlowKind::Income,
            FlowKind::Income => FlowKind::Expense,
        }
    }
}

/// A single ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub id: i64,
    pub kind: FlowKind,
    pub amount_minor: i64,
    pub pay_type_id: i64,
    pub pay_type_name: String,
    pub account_id: Option<i64>,
    pub account_name: Option<String>,
    pub remark: Option<String>,
    /// Server-side reference to an attached receipt image.
    pub image: Option<String>,
    /// Unix seconds, server clock.
    pub happened_at: i64,
}

impl Bill {
    /// Local wall-clock label like `08-22 14:05`.
    pub fn happened_label(&self) -> String {
        match Local.timestamp_opt(self.happened_at, 0).single() {
            Some(dt) => dt.format("%m-%d %H:%M").to_string(),
            None => "--".to_string(),
        }
    }
}

/// Expense and income totals for a slice of bills, in minor units.
pub fn totals(bills: &[Bill]) -> (i64, i64) {
    let mut expense = 0;
    let mut income = 0;
    for bill in bills {
        match bill.kind {
            FlowKind::Expense => expense += bill.amount_minor,
            FlowKind::Income => income += bill.amount_minor,
        }
    }
    (expense, income)
}

/// A bill category. Categories form a two-level tree: `parent_id == 0`
/// marks a root, anything else is a child of that root.
#[derive(Debug, Clone, PartialEq)]
pub struct PayType {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
    pub kind: FlowKind,
    pub sort: i32,
}

impl PayType {
    pub fn is_root(&self) -> bool {
        self.parent_id == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Electronic,
    Savings,
}

impl AccountKind {
    /// Wire code: 1 = electronic, 2 = savings.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(AccountKind::Electronic),
            2 => Some(AccountKind::Savings),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountKind::Electronic => "Electronic",
            AccountKind::Savings => "Savings",
        }
    }
}

/// A funding account bills can be drawn from or paid into.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub kind: AccountKind,
    pub balance_minor: i64,
    pub remark: Option<String>,
}

/// The signed-in user as reported by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub nick_name: String,
    pub email: Option<String>,
    pub bill_count: i64,
    pub account_count: i64,
}

/// A captcha challenge: the uuid goes back with the login request, the
/// image is decoded to a temp file the user can open.
#[derive(Debug, Clone, PartialEq)]
pub struct Captcha {
    pub uuid: String,
    pub image_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgreementKind {
    #[default]
    UserTerms,
    Privacy,
}

impl AgreementKind {
    /// Path segment under the agreement endpoint.
    pub fn segment(self) -> &'static str {
        match self {
            AgreementKind::UserTerms => "user",
            AgreementKind::Privacy => "privacy",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AgreementKind::UserTerms => "User Agreement",
            AgreementKind::Privacy => "Privacy Policy",
        }
    }
}

/// An agreement page reduced to plain text for terminal display.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgreementDoc {
    pub title: String,
    pub body: String,
}

/// A calendar month used to window the bill list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn current() -> Self {
        let now = Local::now();
        Month {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Month {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Month {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Server query form, `YYYY-MM`.
    pub fn query(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl Default for Month {
    fn default() -> Self {
        Month {
            year: 1970,
            month: 1,
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
