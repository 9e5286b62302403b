mod intent;
mod reducer;
mod state;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::HomeState;
