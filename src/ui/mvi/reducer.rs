//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// The result of one reduce step: the next state plus any effects the
/// shell should carry out.
#[derive(Debug)]
pub struct Transition<S, E> {
    pub state: S,
    pub effects: Vec<E>,
}

impl<S, E> Transition<S, E> {
    /// A pure state change with no effects.
    pub fn none(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn one(state: S, effect: E) -> Self {
        Self {
            state,
            effects: vec![effect],
        }
    }

    pub fn many(state: S, effects: Vec<E>) -> Self {
        Self { state, effects }
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> Transition
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect type this reducer may emit.
    type Effect: Effect;

    /// Process an intent and return the new state with its effects.
    ///
    /// This should be a pure function with no side effects of its own;
    /// anything that touches the world goes out as an effect value.
    fn reduce(state: Self::State, intent: Self::Intent) -> Transition<Self::State, Self::Effect>;
}
