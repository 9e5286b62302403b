use crate::domain::Event;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum EventDetailsIntent {
    /// Event details arrived (initial fetch or a re-fetch after
    /// commenting/vouching).
    Loaded { event: Event },
    Failed { message: String },
    /// Open the comment window.
    OpenComments,
    /// Open the options menu.
    OpenOptions,
    ClosePanel,
    /// The comment draft changed.
    DraftChanged { text: String },
}

impl Intent for EventDetailsIntent {}
