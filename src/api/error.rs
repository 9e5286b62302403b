use thiserror::Error;

/// Errors surfaced by the API client.
///
/// There is no retry policy: every error is terminal for the user action
/// that triggered the request, and the shell shows it as an alert.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to construct the HTTP client itself.
    #[error("Failed to build HTTP client: {source}")]
    Build {
        #[source]
        source: reqwest::Error,
    },

    /// The request never got a response (DNS, refused, timeout).
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success HTTP status.
    #[error("Backend returned status {status}")]
    Status { status: u16 },

    /// The response body was not a valid envelope.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// The envelope arrived with `success: false`.
    #[error("{message}")]
    Rejected { message: String },

    /// `success: true` but the expected `data` field is absent.
    #[error("Response envelope is missing data")]
    MissingData,
}
