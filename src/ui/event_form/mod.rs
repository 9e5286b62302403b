mod intent;
mod reducer;
mod state;

pub use intent::EventFormIntent;
pub use reducer::EventFormReducer;
pub use state::{
    parse_location, EventFormState, FormMode, AGE_GROUP_OPTIONS, CATEGORY_OPTIONS,
};
