mod intent;
mod reducer;
mod state;
mod view;

pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use state::{CaptchaState, LoginState, FIELD_CODE, FIELD_PASSWORD, FIELD_USERNAME};
pub use view::render;
