use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Submitted { query } => SearchState::Searching { query },
            SearchIntent::Loaded { users, events } => match state {
                SearchState::Searching { query } => SearchState::Results {
                    query,
                    users,
                    events,
                },
                // Results without an in-flight query are stale; drop them.
                other => other,
            },
            SearchIntent::Failed { message } => match state {
                SearchState::Searching { query } => SearchState::Failed { query, message },
                other => other,
            },
            SearchIntent::Cleared => SearchState::Idle,
        }
    }
}
