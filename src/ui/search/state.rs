use crate::domain::{EventSummary, UserSummary};
use crate::ui::mvi::UiState;

/// Search screen: one query box over both users and events.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching {
        query: String,
    },
    Results {
        query: String,
        users: Vec<UserSummary>,
        events: Vec<EventSummary>,
    },
    Failed {
        query: String,
        message: String,
    },
}

impl UiState for SearchState {}

impl SearchState {
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Searching { query }
            | Self::Results { query, .. }
            | Self::Failed { query, .. } => Some(query),
        }
    }
}
