//! View state machines for the five screens.
//!
//! Each screen is a state/intent/reducer triple built on the [`mvi`]
//! primitives. Reducers are pure; network calls and alerts live in the
//! application shell ([`crate::app`]).

pub mod event_details;
pub mod event_form;
pub mod home;
pub mod mvi;
pub mod profile;
pub mod search;
