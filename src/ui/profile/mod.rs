mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::{ProfileState, FIELD_EMAIL, FIELD_NICKNAME};
pub use view::render;
