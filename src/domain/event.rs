use serde::{Deserialize, Serialize};

use crate::domain::Comment;

/// A full event as returned by `GET /event/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub category: Vec<String>,
    /// Datetime as the backend sends it. The backend is not consistent
    /// about the format, so the client treats it as opaque display text.
    pub date: String,
    pub price: f64,
    /// Latitude/longitude pair, `[lat, lng]` on the wire.
    pub location: (f64, f64),
    pub age_group: Vec<String>,
    /// User id of the host. Only the host may edit the event.
    pub host: String,
    #[serde(default)]
    pub interested_in: Vec<String>,
    /// User ids that vouched for the event. At most one entry per user;
    /// toggling is idempotent on the backend side.
    #[serde(default)]
    pub vouchers: Vec<String>,
    #[serde(default)]
    pub comments_data: Vec<Comment>,
}

impl Event {
    pub fn is_vouched_by(&self, user_id: &str) -> bool {
        self.vouchers.iter().any(|v| v == user_id)
    }

    pub fn is_hosted_by(&self, user_id: &str) -> bool {
        self.host == user_id
    }
}

/// Reduced event shape returned by `/event/recommended/*` and `/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub category: Vec<String>,
    pub date: String,
    pub price: f64,
}

/// Request body for `POST /event` and `PUT /event/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub category: Vec<String>,
    pub date: String,
    pub price: f64,
    pub location: (f64, f64),
    pub age_group: Vec<String>,
    /// Injected from the session context, never user input.
    pub host: String,
}

/// Request body for `PUT /vouch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VouchToggle {
    pub event_id: u64,
    pub user_id: String,
}
