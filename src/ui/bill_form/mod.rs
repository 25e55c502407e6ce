mod intent;
mod reducer;
mod state;
mod view;

pub use intent::BillFormIntent;
pub use reducer::BillFormReducer;
pub use state::{BillFocus, BillFormState, FIELD_AMOUNT, FIELD_DATE, FIELD_REMARK};
pub use view::render;
