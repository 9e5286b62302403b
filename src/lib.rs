//! Client core for BeThere, an event-discovery and social web app.
//!
//! The crate is the headless application layer behind the UI: a typed
//! [`domain`] model of the backend's JSON, a thin [`api`] client, pure
//! view state machines in [`ui`], client-side [`validate`] rules, the
//! logged-in [`session`] context and the orchestrating [`app`] shell.
//! The backend itself is an external collaborator.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod session;
pub mod ui;
pub mod validate;
