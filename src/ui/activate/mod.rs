mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ActivateIntent;
pub use reducer::ActivateReducer;
pub use state::{ActivateState, FIELD_CODE, FIELD_USERNAME};
pub use view::render;
