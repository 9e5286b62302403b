use crate::domain::EventSummary;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    /// Recommended events arrived.
    Loaded { events: Vec<EventSummary> },
    /// The fetch failed; the message is display text.
    Failed { message: String },
    /// Return to loading for a fresh fetch.
    Refresh,
}

impl Intent for HomeIntent {}
