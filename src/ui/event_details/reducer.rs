use crate::ui::event_details::intent::EventDetailsIntent;
use crate::ui::event_details::state::{DetailsPanel, EventDetailsState};
use crate::ui::mvi::Reducer;

pub struct EventDetailsReducer;

impl Reducer for EventDetailsReducer {
    type State = EventDetailsState;
    type Intent = EventDetailsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A (re-)fetch always resets the panel: the fresh event is
            // the single source of truth for what's on screen.
            EventDetailsIntent::Loaded { event } => EventDetailsState::Loaded {
                event,
                panel: DetailsPanel::None,
            },
            EventDetailsIntent::Failed { message } => EventDetailsState::Failed { message },
            EventDetailsIntent::OpenComments => match state {
                EventDetailsState::Loaded { event, .. } => EventDetailsState::Loaded {
                    event,
                    panel: DetailsPanel::Comments {
                        draft: String::new(),
                    },
                },
                other => other,
            },
            EventDetailsIntent::OpenOptions => match state {
                EventDetailsState::Loaded { event, .. } => EventDetailsState::Loaded {
                    event,
                    panel: DetailsPanel::Options,
                },
                other => other,
            },
            EventDetailsIntent::ClosePanel => match state {
                EventDetailsState::Loaded { event, .. } => EventDetailsState::Loaded {
                    event,
                    panel: DetailsPanel::None,
                },
                other => other,
            },
            EventDetailsIntent::DraftChanged { text } => match state {
                EventDetailsState::Loaded {
                    event,
                    panel: DetailsPanel::Comments { .. },
                } => EventDetailsState::Loaded {
                    event,
                    panel: DetailsPanel::Comments { draft: text },
                },
                other => other,
            },
        }
    }
}
