mod intent;
mod reducer;
mod state;

pub use intent::EventDetailsIntent;
pub use reducer::EventDetailsReducer;
pub use state::{DetailsPanel, EventDetailsState};
