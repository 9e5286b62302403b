//! HTTP client for the BeThere backend.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
