use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Loaded {
                user,
                is_following,
                can_moderate,
            } => ProfileState::Loaded {
                user,
                is_following,
                can_moderate,
            },
            ProfileIntent::Failed { message } => ProfileState::Failed { message },
            ProfileIntent::FollowToggled => match state {
                ProfileState::Loaded {
                    user,
                    is_following,
                    can_moderate,
                } => ProfileState::Loaded {
                    user,
                    is_following: !is_following,
                    can_moderate,
                },
                other => other,
            },
        }
    }
}
