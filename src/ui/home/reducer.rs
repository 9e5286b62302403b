use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::Loaded { events } => HomeState::Loaded { events },
            HomeIntent::Failed { message } => HomeState::Failed { message },
            HomeIntent::Refresh => HomeState::Loading,
        }
    }
}
