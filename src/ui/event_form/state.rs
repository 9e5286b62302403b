use std::collections::BTreeSet;

use crate::domain::{Event, EventDraft};
use crate::ui::mvi::UiState;

/// Category tags offered by the form.
pub const CATEGORY_OPTIONS: [&str; 4] = ["Party", "Music", "Sports", "Other"];

/// Age-group tags offered by the form.
pub const AGE_GROUP_OPTIONS: [&str; 3] = ["Teens", "Adults", "Everyone"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        event_id: u64,
    },
}

/// The "New Event" / "Edit Event" form.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFormState {
    pub mode: FormMode,
    pub name: String,
    pub date: String,
    pub price: f64,
    pub description: String,
    /// Free-text "lat, lng" input, parsed on submit.
    pub location_input: String,
    pub categories: BTreeSet<String>,
    pub age_groups: BTreeSet<String>,
}

impl Default for EventFormState {
    fn default() -> Self {
        // "Other" and "Everyone" start selected, matching the rendered
        // form's pre-checked tags.
        Self {
            mode: FormMode::Create,
            name: String::new(),
            date: String::new(),
            price: 0.0,
            description: String::new(),
            location_input: String::new(),
            categories: BTreeSet::from(["Other".to_string()]),
            age_groups: BTreeSet::from(["Everyone".to_string()]),
        }
    }
}

impl UiState for EventFormState {}

impl EventFormState {
    /// Form pre-filled from an existing event, for the host's edit flow.
    pub fn for_edit(event: &Event) -> Self {
        Self {
            mode: FormMode::Edit { event_id: event.id },
            name: event.name.clone(),
            date: event.date.clone(),
            price: event.price,
            description: event.description.clone(),
            location_input: format!("{}, {}", event.location.0, event.location.1),
            categories: event.category.iter().cloned().collect(),
            age_groups: event.age_group.iter().cloned().collect(),
        }
    }

    /// Request body for submission. The host id comes from the session
    /// context, never from form input.
    pub fn to_draft(&self, host: &str) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.categories.iter().cloned().collect(),
            date: self.date.clone(),
            price: self.price,
            location: parse_location(&self.location_input).unwrap_or((0.0, 0.0)),
            age_group: self.age_groups.iter().cloned().collect(),
            host: host.to_string(),
        }
    }
}

/// Parses a "lat, lng" pair typed into the location field.
pub fn parse_location(input: &str) -> Option<(f64, f64)> {
    let (lat, lng) = input.split_once(',')?;
    Some((lat.trim().parse().ok()?, lng.trim().parse().ok()?))
}
