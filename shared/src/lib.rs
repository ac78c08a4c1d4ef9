pub mod api;
pub mod models;

pub use api::{Envelope, EventListResponse, EventResponse};
pub use models::{Event, EventId};
