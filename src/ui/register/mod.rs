mod intent;
mod reducer;
mod state;
mod view;

pub use intent::RegisterIntent;
pub use reducer::RegisterReducer;
pub use state::{RegisterState, FIELD_CONFIRM, FIELD_EMAIL, FIELD_NICKNAME, FIELD_PASSWORD, FIELD_USERNAME};
pub use view::render;
