mod intent;
mod reducer;
mod state;
mod view;

pub use intent::AgreementIntent;
pub use reducer::AgreementReducer;
pub use state::AgreementState;
pub use view::render;
