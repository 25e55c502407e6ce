//! Stack navigation.
//!
//! Screens live on a single stack: push to go deeper, back pops, and a
//! back press on the last entry asks the shell to quit instead of
//! leaving an empty stack.

use crate::model::AgreementKind;

/// Every screen the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    Forgot,
    Activate,
    Home,
    BillForm,
    PayTypes,
    Accounts,
    Profile,
    Settings,
    Agreement {
        kind: AgreementKind,
        /// When set, the page ends in accept/decline instead of a
        /// plain back action.
        consent: bool,
    },
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Register => "Create Account",
            Screen::Forgot => "Reset Password",
            Screen::Activate => "Activate Account",
            Screen::Home => "Bills",
            Screen::BillForm => "New Bill",
            Screen::PayTypes => "Categories",
            Screen::Accounts => "Accounts",
            Screen::Profile => "Profile",
            Screen::Settings => "Settings",
            Screen::Agreement { kind, .. } => kind.title(),
        }
    }
}

/// Navigation changes reducers may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Push(Screen),
    /// Push, but if an equal entry already exists move it to the top
    /// instead of stacking a duplicate.
    BringToFront(Screen),
    /// Drop everything and start a fresh stack on `root`.
    Reset(Screen),
    Back,
}

/// What a back request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popped {
    /// The stack popped and this screen is now on top.
    To(Screen),
    /// The stack had one entry; leaving it means leaving the app.
    WouldExit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavStack {
    entries: Vec<Screen>,
}

impl NavStack {
    pub fn new(root: Screen) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn current(&self) -> Screen {
        *self.entries.last().expect("nav stack is never empty")
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Pushes `screen` unless it is already on top.
    pub fn push(&mut self, screen: Screen) {
        if self.current() != screen {
            self.entries.push(screen);
        }
    }

    /// Pushes `screen`, removing any equal entry further down first.
    pub fn bring_to_front(&mut self, screen: Screen) {
        self.entries.retain(|entry| *entry != screen);
        self.entries.push(screen);
    }

    pub fn reset(&mut self, root: Screen) {
        self.entries.clear();
        self.entries.push(root);
    }

    pub fn back(&mut self) -> Popped {
        if self.entries.len() == 1 {
            return Popped::WouldExit;
        }
        self.entries.pop();
        Popped::To(self.current())
    }
}
