use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::{Envelope, Event, EventId, EventListResponse, EventResponse};
use thiserror::Error;

use crate::config::ApiConfig;

/// Failure of a single request to the events API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or unreadable body
    #[error("Request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status and a body that is not
    /// an envelope
    #[error("HTTP error: {0}")]
    Http(u16),

    /// Body is not a valid `{ data: ... }` envelope
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to the events collection.
///
/// Futures are not `Send`: everything runs on the browser's event loop.
#[allow(async_fn_in_trait)]
pub trait EventsApi {
    /// All events, in the order the API returns them. An envelope without
    /// `data` yields an empty list.
    async fn list_events(&self) -> Result<Vec<Event>, ApiError>;

    /// One event by id. An envelope without `data` yields `None`.
    async fn get_event(&self, id: EventId) -> Result<Option<Event>, ApiError>;
}

/// `EventsApi` over HTTP using the browser's fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpEventsApi {
    config: ApiConfig,
}

impl HttpEventsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get_envelope<T: DeserializeOwned>(&self, url: &str) -> Result<Envelope<T>, ApiError> {
        tracing::debug!(url, "GET");

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        decode_envelope(response.status(), &body)
    }
}

/// Decode a response body whatever its status.
///
/// Error statuses that still carry a JSON envelope (such as a 404
/// `{"error": ...}`) decode to an envelope without `data`. Only an
/// undecodable body is an error, reported as `Http` for error statuses.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ApiError> {
    let success = (200..300).contains(&status);
    if !success {
        tracing::warn!(status, "API answered with an error status");
    }

    match Envelope::from_json(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !success => Err(ApiError::Http(status)),
        Err(e) => Err(ApiError::Decode(e)),
    }
}

impl EventsApi for HttpEventsApi {
    async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let response: EventListResponse = self.get_envelope(&self.config.events_url()).await?;
        Ok(response.into_inner().unwrap_or_default())
    }

    async fn get_event(&self, id: EventId) -> Result<Option<Event>, ApiError> {
        let response: EventResponse = self.get_envelope(&self.config.event_url(id)).await?;
        Ok(response.into_inner())
    }
}
