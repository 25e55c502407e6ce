mod intent;
mod reducer;
mod state;
mod view;

pub use intent::AccountsIntent;
pub use reducer::AccountsReducer;
pub use state::AccountsState;
pub use view::render;
