//! Client-side form validation.
//!
//! A validation failure blocks the network call entirely and surfaces as
//! a blocking alert. The alert text is user-facing and exact.

use std::collections::BTreeSet;

use thiserror::Error;

/// Alert shown when the event form lacks a category or age-group tag.
pub const EVENT_TAGS_ALERT: &str = "You must select at least one Category and one Age Group.";

/// Alert shown when a comment is submitted empty.
pub const COMMENT_TEXT_ALERT: &str = "Comment text is required";

/// A blocking validation failure; the display text is the alert message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: &'static str,
}

/// The event form requires at least one category and one age-group tag.
pub fn validate_event_tags(
    categories: &BTreeSet<String>,
    age_groups: &BTreeSet<String>,
) -> Result<(), ValidationError> {
    if categories.is_empty() || age_groups.is_empty() {
        return Err(ValidationError {
            message: EVENT_TAGS_ALERT,
        });
    }
    Ok(())
}

/// Comments must have non-empty text after trimming.
pub fn validate_comment_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError {
            message: COMMENT_TEXT_ALERT,
        });
    }
    Ok(())
}
