mod intent;
mod reducer;
mod state;
mod view;

pub use intent::PayTypesIntent;
pub use reducer::PayTypesReducer;
pub use state::{arrange, EditTarget, PayTypesMode, PayTypesState};
pub use view::render;
