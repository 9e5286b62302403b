use crate::domain::User;
use crate::ui::mvi::UiState;

/// Another user's profile screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded {
        user: User,
        /// Whether the session user follows this profile. Flips locally
        /// on a successful follow PUT; no profile re-fetch is implied.
        is_following: bool,
        /// Whether moderation controls (Ban/Restrict) render at all.
        can_moderate: bool,
    },
    Failed {
        message: String,
    },
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Loaded { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Label for the follow button.
    pub fn follow_label(&self) -> &'static str {
        match self {
            Self::Loaded {
                is_following: true, ..
            } => "Following ✓",
            _ => "Follow +",
        }
    }

    /// True when the Ban/Restrict buttons are rendered.
    pub fn shows_moderation(&self) -> bool {
        matches!(
            self,
            Self::Loaded {
                can_moderate: true,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    fn loaded(is_following: bool, can_moderate: bool) -> ProfileState {
        ProfileState::Loaded {
            user: User {
                id: "u2".to_string(),
                username: "giannis".to_string(),
                name: "Papadopoulos Giannis".to_string(),
                followers: Vec::new(),
                following: Vec::new(),
                role: Role::Regular,
            },
            is_following,
            can_moderate,
        }
    }

    #[test]
    fn follow_label_tracks_state() {
        assert_eq!(loaded(false, false).follow_label(), "Follow +");
        assert_eq!(loaded(true, false).follow_label(), "Following ✓");
        assert_eq!(ProfileState::Loading.follow_label(), "Follow +");
    }

    #[test]
    fn moderation_requires_loaded_admin_view() {
        assert!(loaded(false, true).shows_moderation());
        assert!(!loaded(false, false).shows_moderation());
        assert!(!ProfileState::Loading.shows_moderation());
    }
}
