use shared::api::{event_path, events_path};
use shared::EventId;

const DEFAULT_API_BASE_URL: &str = "https://fsa-crud-2aa9294fe819.herokuapp.com/api";
const DEFAULT_API_COHORT: &str = "2511-FTB-CT-WEB-PT";

/// Id of the element the application mounts into
pub const MOUNT_POINT_ID: &str = "app";

/// Location of the events API.
///
/// A wasm bundle has no process environment, so overrides are read at
/// compile time from `EVENTS_API_BASE_URL` and `EVENTS_API_COHORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub cohort: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, cohort: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cohort: cohort.into(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("EVENTS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("EVENTS_API_COHORT").unwrap_or(DEFAULT_API_COHORT),
        )
    }

    pub fn events_url(&self) -> String {
        format!("{}/{}", self.base(), events_path(&self.cohort))
    }

    pub fn event_url(&self, id: EventId) -> String {
        format!("{}/{}", self.base(), event_path(&self.cohort, id))
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_API_COHORT)
    }
}
