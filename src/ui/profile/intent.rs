use crate::domain::User;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// Profile fetched; flags are computed against the session user.
    Loaded {
        user: User,
        is_following: bool,
        can_moderate: bool,
    },
    Failed { message: String },
    /// The follow PUT succeeded; flip the displayed state.
    FollowToggled,
}

impl Intent for ProfileIntent {}
