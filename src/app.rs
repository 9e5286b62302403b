//! Application shell: wires the API client to the view state machines.
//!
//! The shell performs the side effects reducers must not: it validates
//! input, issues at most one network request per user action (awaited to
//! completion, no overlap), raises alerts and navigates between screens.

use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::domain::{NewComment, VouchToggle};
use crate::session::SessionContext;
use crate::ui::event_details::{EventDetailsIntent, EventDetailsReducer, EventDetailsState};
use crate::ui::event_form::{EventFormIntent, EventFormReducer, EventFormState, FormMode};
use crate::ui::home::{HomeIntent, HomeReducer, HomeState};
use crate::ui::mvi::Reducer;
use crate::ui::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crate::validate::{validate_comment_text, validate_event_tags};

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home(HomeState),
    EventDetails(EventDetailsState),
    EventForm(EventFormState),
    Search(SearchState),
    Profile(ProfileState),
}

/// Application shell. Owns the API client, the session context, the
/// current screen and the alert log (the `window.alert` surface).
pub struct App {
    api: ApiClient,
    session: SessionContext,
    screen: Screen,
    alerts: Vec<String>,
}

impl App {
    pub fn new(api: ApiClient, session: SessionContext) -> Self {
        Self {
            api,
            session,
            screen: Screen::Home(HomeState::Loading),
            alerts: Vec::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "alert");
        self.alerts.push(message);
    }

    // -- navigation ----------------------------------------------------------

    /// Show the home screen and fetch recommended events.
    pub async fn open_home(&mut self) {
        self.screen = Screen::Home(HomeState::Loading);
        let user_id = self.session.user_id();
        let intent = match self.api.recommended_events(&user_id).await {
            Ok(events) => HomeIntent::Loaded { events },
            Err(err) => HomeIntent::Failed {
                message: err.to_string(),
            },
        };
        self.screen = Screen::Home(HomeReducer::reduce(HomeState::Loading, intent));
    }

    /// Show event details. Also used as the re-fetch after commenting
    /// and vouching, so displayed state always derives from fresh data.
    pub async fn open_event(&mut self, id: u64) {
        self.screen = Screen::EventDetails(EventDetailsState::Loading);
        let intent = match self.api.event(id).await {
            Ok(event) => EventDetailsIntent::Loaded { event },
            Err(err) => EventDetailsIntent::Failed {
                message: err.to_string(),
            },
        };
        self.apply_details(intent);
    }

    pub fn open_create_form(&mut self) {
        self.screen = Screen::EventForm(EventFormState::default());
    }

    /// Open the edit form for the event on screen. Hosts only.
    pub fn open_edit_form(&mut self) {
        let Screen::EventDetails(details) = &self.screen else {
            return;
        };
        let Some(event) = details.event() else {
            return;
        };
        if !event.is_hosted_by(&self.session.user_id()) {
            warn!(event_id = event.id, "edit refused: session user is not the host");
            return;
        }
        let form = EventFormState::for_edit(event);
        self.screen = Screen::EventForm(form);
    }

    pub fn open_search(&mut self) {
        self.screen = Screen::Search(SearchState::Idle);
    }

    /// Fetch a user's profile. The follow and moderation flags are
    /// computed against the session user up front.
    pub async fn open_profile(&mut self, username: &str) {
        self.screen = Screen::Profile(ProfileState::Loading);
        let viewer = self.session.current_user();
        let intent = match self.api.user(username).await {
            Ok(user) => ProfileIntent::Loaded {
                is_following: user.followers.iter().any(|f| *f == viewer.id),
                can_moderate: self.session.is_admin() && user.id != viewer.id,
                user,
            },
            Err(err) => ProfileIntent::Failed {
                message: err.to_string(),
            },
        };
        self.apply_profile(intent);
    }

    // -- event form ----------------------------------------------------------

    pub fn update_form(&mut self, intent: EventFormIntent) {
        if let Screen::EventForm(state) = &mut self.screen {
            *state = EventFormReducer::reduce(std::mem::take(state), intent);
        }
    }

    /// Submit the form: POST on create, PUT on edit. A validation
    /// failure alerts and never issues a request; the form stays up.
    pub async fn submit_event_form(&mut self) {
        let Screen::EventForm(form) = &self.screen else {
            return;
        };
        let validation = validate_event_tags(&form.categories, &form.age_groups);
        let draft = form.to_draft(&self.session.user_id());
        let mode = form.mode.clone();

        if let Err(err) = validation {
            self.alert(err.message);
            return;
        }

        let result = match &mode {
            FormMode::Create => self.api.create_event(&draft).await,
            FormMode::Edit { event_id } => self.api.update_event(*event_id, &draft).await,
        };

        match result {
            Ok(()) => match mode {
                FormMode::Create => {
                    debug!(name = %draft.name, "event created");
                    self.open_home().await;
                }
                FormMode::Edit { event_id } => {
                    debug!(event_id, "event updated");
                    self.open_event(event_id).await;
                }
            },
            Err(err) => self.alert(err.to_string()),
        }
    }

    // -- event details panels ---------------------------------------------

    pub fn open_comment_panel(&mut self) {
        self.apply_details(EventDetailsIntent::OpenComments);
    }

    pub fn open_options_menu(&mut self) {
        self.apply_details(EventDetailsIntent::OpenOptions);
    }

    pub fn close_panel(&mut self) {
        self.apply_details(EventDetailsIntent::ClosePanel);
    }

    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.apply_details(EventDetailsIntent::DraftChanged { text: text.into() });
    }

    /// Post the comment draft, then re-fetch the event so the new
    /// comment shows up. Empty drafts alert and never hit the network.
    pub async fn submit_comment(&mut self) {
        let Screen::EventDetails(details) = &self.screen else {
            return;
        };
        let Some(event) = details.event() else {
            return;
        };
        let event_id = event.id;
        let draft = details.comment_draft().unwrap_or("").to_string();

        if let Err(err) = validate_comment_text(&draft) {
            self.alert(err.message);
            return;
        }

        let comment = NewComment {
            event_id,
            text: draft.trim().to_string(),
            poster: self.session.user_id(),
        };
        match self.api.post_comment(&comment).await {
            Ok(()) => {
                debug!(event_id, "comment posted");
                self.open_event(event_id).await;
            }
            Err(err) => self.alert(err.to_string()),
        }
    }

    /// Toggle the session user's vouch, then re-fetch: the button label
    /// derives purely from the fresh vouchers list.
    pub async fn toggle_vouch(&mut self) {
        let Screen::EventDetails(details) = &self.screen else {
            return;
        };
        let Some(event) = details.event() else {
            return;
        };
        let toggle = VouchToggle {
            event_id: event.id,
            user_id: self.session.user_id(),
        };
        match self.api.toggle_vouch(&toggle).await {
            Ok(()) => self.open_event(toggle.event_id).await,
            Err(err) => self.alert(err.to_string()),
        }
    }

    // -- search ----------------------------------------------------------

    pub async fn submit_search(&mut self, query: &str) {
        let searching = SearchReducer::reduce(
            SearchState::Idle,
            SearchIntent::Submitted {
                query: query.to_string(),
            },
        );
        self.screen = Screen::Search(searching);

        let intent = match self.api.search(query).await {
            Ok(results) => SearchIntent::Loaded {
                users: results.users,
                events: results.events,
            },
            Err(err) => SearchIntent::Failed {
                message: err.to_string(),
            },
        };
        self.apply_search(intent);
    }

    // -- profile actions ---------------------------------------------------

    /// Follow or unfollow the profile on screen; the displayed state
    /// flips on PUT success.
    pub async fn toggle_follow(&mut self) {
        let Screen::Profile(profile) = &self.screen else {
            return;
        };
        let Some(user) = profile.user() else {
            return;
        };
        let username = user.username.clone();
        match self.api.toggle_follow(&username).await {
            Ok(()) => self.apply_profile(ProfileIntent::FollowToggled),
            Err(err) => self.alert(err.to_string()),
        }
    }

    /// Ban the profile on screen. Admin sessions only.
    pub async fn ban_user(&mut self) {
        let Some(username) = self.moderation_target("ban") else {
            return;
        };
        match self.api.ban_user(&username).await {
            Ok(()) => self.alert("ban successful!"),
            Err(err) => self.alert(err.to_string()),
        }
    }

    /// Restrict the profile on screen. Admin sessions only.
    pub async fn restrict_user(&mut self) {
        let Some(username) = self.moderation_target("restrict") else {
            return;
        };
        match self.api.restrict_user(&username).await {
            Ok(()) => self.alert("restrict successful!"),
            Err(err) => self.alert(err.to_string()),
        }
    }

    /// Moderation never reaches the network for non-admin sessions; the
    /// buttons are not rendered for them, so such a call is a bug.
    fn moderation_target(&self, action: &str) -> Option<String> {
        let Screen::Profile(profile) = &self.screen else {
            return None;
        };
        let user = profile.user()?;
        if !self.session.is_admin() {
            warn!(
                action,
                username = %user.username,
                "moderation refused: session user is not an admin"
            );
            return None;
        }
        Some(user.username.clone())
    }

    // -- reducer plumbing --------------------------------------------------

    fn apply_details(&mut self, intent: EventDetailsIntent) {
        if let Screen::EventDetails(state) = &mut self.screen {
            *state = EventDetailsReducer::reduce(std::mem::take(state), intent);
        }
    }

    fn apply_search(&mut self, intent: SearchIntent) {
        if let Screen::Search(state) = &mut self.screen {
            *state = SearchReducer::reduce(std::mem::take(state), intent);
        }
    }

    fn apply_profile(&mut self, intent: ProfileIntent) {
        if let Screen::Profile(state) = &mut self.screen {
            *state = ProfileReducer::reduce(std::mem::take(state), intent);
        }
    }
}
