//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑            │
//!    │            └──→ Effects (api calls, navigation, toasts)
//!    └───────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function from state and intent to a transition
//! - **Effect**: One-shot side effects the shell carries out

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::Effect;
pub use intent::Intent;
pub use reducer::{Reducer, Transition};
pub use state::UiState;
