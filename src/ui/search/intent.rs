use crate::domain::{EventSummary, UserSummary};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// Enter pressed in the search box.
    Submitted { query: String },
    /// Results arrived for the in-flight query.
    Loaded {
        users: Vec<UserSummary>,
        events: Vec<EventSummary>,
    },
    Failed { message: String },
    Cleared,
}

impl Intent for SearchIntent {}
