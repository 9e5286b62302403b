use crate::domain::EventSummary;
use crate::ui::mvi::UiState;

/// Home screen: recommended events for the session user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HomeState {
    #[default]
    Loading,
    Loaded {
        events: Vec<EventSummary>,
    },
    Failed {
        message: String,
    },
}

impl UiState for HomeState {}

impl HomeState {
    pub fn events(&self) -> &[EventSummary] {
        match self {
            Self::Loaded { events } => events,
            _ => &[],
        }
    }
}
