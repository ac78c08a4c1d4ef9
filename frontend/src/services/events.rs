//! Fetch-and-tag orchestration between `EventsApi` and `AppState`.
//!
//! Each call awaits one request and turns the result into an `AppAction`
//! carrying the ticket it was issued with. Dispatching or logging the
//! outcome is up to the caller.

use shared::EventId;

use crate::services::api::{ApiError, EventsApi};
use crate::state::{AppAction, AppState, RequestSequence, RequestTicket};

/// Fetch the full list of events.
pub async fn load_events<A: EventsApi>(
    api: &A,
    ticket: RequestTicket,
) -> Result<AppAction, ApiError> {
    let events = api.list_events().await?;
    tracing::info!(count = events.len(), ticket = ticket.value(), "Fetched events");
    Ok(AppAction::EventsLoaded { ticket, events })
}

/// Fetch a single event for the details panel.
pub async fn load_event<A: EventsApi>(
    api: &A,
    id: EventId,
    ticket: RequestTicket,
) -> Result<AppAction, ApiError> {
    let event = api.get_event(id).await?;
    if event.is_none() {
        tracing::warn!(event_id = id, "Event response carried no data");
    }
    Ok(AppAction::EventLoaded { ticket, event })
}

/// Startup: fetch the list once and build the state to mount with.
/// A failed fetch is logged and yields an empty state.
pub async fn initial_state<A: EventsApi>(api: &A, sequence: &RequestSequence) -> AppState {
    let mut state = AppState::default();
    match load_events(api, sequence.next()).await {
        Ok(action) => {
            state.apply(action);
        }
        Err(e) => tracing::error!("Failed to fetch events: {}", e),
    }
    state
}
