//! Wire types for the events API.
//!
//! Every response body is wrapped in a `{ "data": ... }` envelope, both for
//! the collection and for a single event.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::models::{Event, EventId};

/// Path segment of the events collection, relative to the cohort root
pub const EVENTS_RESOURCE: &str = "events";

/// Path of the events collection under a cohort root
pub fn events_path(cohort: &str) -> String {
    format!("{}/{}", cohort.trim_matches('/'), EVENTS_RESOURCE)
}

/// Path of a single event under a cohort root
pub fn event_path(cohort: &str, id: EventId) -> String {
    format!("{}/{}", events_path(cohort), id)
}

// ============================================================================
// Envelope
// ============================================================================

/// The `{ data: ... }` wrapper used by every response.
///
/// `data` is `None` when the field is missing or `null`. That is not treated
/// as an error: callers read it as an empty list or "nothing selected".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap and return the payload, if any.
    pub fn into_inner(self) -> Option<T> {
        self.data
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an envelope from a raw response body.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }
}

/// Response of `GET <cohort>/events`
pub type EventListResponse = Envelope<Vec<Event>>;

/// Response of `GET <cohort>/events/<id>`
pub type EventResponse = Envelope<Event>;
