use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::api::ApiError;
use crate::config::ApiConfig;
use crate::domain::{
    Envelope, Event, EventDraft, EventSummary, NewComment, SearchResults, User, VouchToggle,
};

/// Thin client for the BeThere backend, one method per endpoint.
///
/// Every response is the `{success, data?, message?}` envelope;
/// `success: false` becomes [`ApiError::Rejected`]. Requests are
/// fire-and-await with no retries and no overlap per user action.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .build()
            .map_err(|source| ApiError::Build { source })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /event/recommended/{user_id}`
    pub async fn recommended_events(&self, user_id: &str) -> Result<Vec<EventSummary>, ApiError> {
        self.get_data(&format!("/event/recommended/{user_id}")).await
    }

    /// `GET /event/{id}`
    pub async fn event(&self, id: u64) -> Result<Event, ApiError> {
        self.get_data(&format!("/event/{id}")).await
    }

    /// `POST /event`
    pub async fn create_event(&self, draft: &EventDraft) -> Result<(), ApiError> {
        self.send_ack(self.http.post(self.url("/event")).json(draft)).await
    }

    /// `PUT /event/{id}`
    pub async fn update_event(&self, id: u64, draft: &EventDraft) -> Result<(), ApiError> {
        self.send_ack(self.http.put(self.url(&format!("/event/{id}"))).json(draft))
            .await
    }

    /// `GET /search?q={query}` over both users and events.
    pub async fn search(&self, query: &str) -> Result<SearchResults, ApiError> {
        let request = self.http.get(self.url("/search")).query(&[("q", query)]);
        let envelope: Envelope<SearchResults> = send(request).await?;
        unwrap_data(envelope)
    }

    /// `GET /user/{username}`
    pub async fn user(&self, username: &str) -> Result<User, ApiError> {
        self.get_data(&format!("/user/{username}")).await
    }

    /// `PUT /user/{username}/follow` - follows or unfollows, backend decides.
    pub async fn toggle_follow(&self, username: &str) -> Result<(), ApiError> {
        self.put_ack(&format!("/user/{username}/follow")).await
    }

    /// `PUT /user/{username}/ban` - admin only.
    pub async fn ban_user(&self, username: &str) -> Result<(), ApiError> {
        self.put_ack(&format!("/user/{username}/ban")).await
    }

    /// `PUT /user/{username}/restrict` - admin only.
    pub async fn restrict_user(&self, username: &str) -> Result<(), ApiError> {
        self.put_ack(&format!("/user/{username}/restrict")).await
    }

    /// `POST /comment`
    pub async fn post_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        self.send_ack(self.http.post(self.url("/comment")).json(comment))
            .await
    }

    /// `PUT /vouch` - adds or removes the user's vouch, backend decides.
    pub async fn toggle_vouch(&self, toggle: &VouchToggle) -> Result<(), ApiError> {
        self.send_ack(self.http.put(self.url("/vouch")).json(toggle))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let envelope: Envelope<T> = send(self.http.get(self.url(path))).await?;
        unwrap_data(envelope)
    }

    async fn put_ack(&self, path: &str) -> Result<(), ApiError> {
        self.send_ack(self.http.put(self.url(path))).await
    }

    async fn send_ack(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> = send(request).await?;
        unwrap_ack(envelope)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<Envelope<T>, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|source| ApiError::Connection { source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }

    response
        .json()
        .await
        .map_err(|source| ApiError::Decode { source })
}

fn unwrap_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
    if !envelope.success {
        return Err(rejection(envelope.message));
    }
    envelope.data.ok_or(ApiError::MissingData)
}

fn unwrap_ack<T>(envelope: Envelope<T>) -> Result<(), ApiError> {
    if !envelope.success {
        return Err(rejection(envelope.message));
    }
    Ok(())
}

fn rejection(message: Option<String>) -> ApiError {
    ApiError::Rejected {
        message: message.unwrap_or_else(|| "Request rejected".to_string()),
    }
}
