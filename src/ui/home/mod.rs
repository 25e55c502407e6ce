mod intent;
mod reducer;
mod state;
mod view;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::HomeState;
pub use view::render;
