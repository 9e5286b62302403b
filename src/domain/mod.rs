//! Typed mirrors of the backend's JSON wire format.
//!
//! Field names are camelCase on the wire; everything arrives wrapped in
//! the [`Envelope`] response shape.

mod comment;
mod envelope;
mod event;
mod user;

pub use comment::{Comment, NewComment};
pub use envelope::Envelope;
pub use event::{Event, EventDraft, EventSummary, VouchToggle};
pub use user::{Role, SearchResults, User, UserSummary};
