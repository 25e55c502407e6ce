//! Base trait for effects in MVI architecture.

/// Marker trait for effect objects.
///
/// Effects are the reducer's way of requesting work it must not do
/// itself: network calls, navigation, anything that touches the world.
/// The shell executes them after applying the state transition.
pub trait Effect: Send + 'static {}
