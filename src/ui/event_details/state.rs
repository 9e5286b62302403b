use crate::domain::Event;
use crate::ui::mvi::UiState;

/// Overlay panel on the event details screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailsPanel {
    #[default]
    None,
    /// The "Write a Comment!" window with the in-progress draft.
    Comments { draft: String },
    /// The options menu (Vouch / Edit Event).
    Options,
}

/// Event details screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EventDetailsState {
    #[default]
    Loading,
    Loaded {
        event: Event,
        panel: DetailsPanel,
    },
    Failed {
        message: String,
    },
}

impl UiState for EventDetailsState {}

impl EventDetailsState {
    pub fn event(&self) -> Option<&Event> {
        match self {
            Self::Loaded { event, .. } => Some(event),
            _ => None,
        }
    }

    /// Label for the vouch button, derived purely from the loaded
    /// event's vouchers list. No local optimistic state.
    pub fn vouch_label(&self, user_id: &str) -> &'static str {
        match self.event() {
            Some(event) if event.is_vouched_by(user_id) => "Vouched",
            _ => "Vouch",
        }
    }

    /// The comment draft, if the comment window is open.
    pub fn comment_draft(&self) -> Option<&str> {
        match self {
            Self::Loaded {
                panel: DetailsPanel::Comments { draft },
                ..
            } => Some(draft),
            _ => None,
        }
    }
}
