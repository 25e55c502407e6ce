mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{SettingsState, ENTRY_COUNT, ENTRY_PRIVACY, ENTRY_SIGN_OUT, ENTRY_TERMS};
pub use view::render;
