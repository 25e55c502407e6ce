mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ForgotIntent;
pub use reducer::ForgotReducer;
pub use state::{ForgotState, FIELD_EMAIL};
pub use view::render;
