//! Declarative description of the page, computed from `AppState`.
//!
//! Nothing here touches the document; components in `crate::components`
//! turn a `PageView` into HTML.

use shared::{Event, EventId};

use crate::state::AppState;

pub const PAGE_TITLE: &str = "Event Planner";
pub const LIST_HEADING: &str = "Upcoming Events";
pub const DETAILS_HEADING: &str = "Event Details";
pub const SELECT_PROMPT: &str = "Please select an event to learn more.";

/// Id of the details section; list entries link here.
pub const DETAILS_ANCHOR: &str = "selected";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: &'static str,
    pub entries: Vec<ListEntry>,
    pub details: DetailsView,
}

/// One clickable row of the event list
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: EventId,
    pub label: String,
}

impl ListEntry {
    pub fn href(&self) -> String {
        format!("#{}", DETAILS_ANCHOR)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsView {
    Prompt(&'static str),
    Event { heading: String, description: String },
}

impl From<&Event> for ListEntry {
    fn from(event: &Event) -> Self {
        ListEntry {
            id: event.id,
            label: event.name.clone(),
        }
    }
}

impl From<Option<&Event>> for DetailsView {
    fn from(selected: Option<&Event>) -> Self {
        match selected {
            None => DetailsView::Prompt(SELECT_PROMPT),
            Some(event) => DetailsView::Event {
                heading: format!("{} #{}", event.name, event.id),
                description: event.description.clone(),
            },
        }
    }
}

/// Map the current state to what should be on screen.
pub fn describe(state: &AppState) -> PageView {
    PageView {
        title: PAGE_TITLE,
        entries: state.events().iter().map(ListEntry::from).collect(),
        details: DetailsView::from(state.selected()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppAction, RequestSequence};

    fn event(id: i64, name: &str, description: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            description: description.to_string(),
            date: "2025-12-01".to_string(),
            location: "Hall".to_string(),
        }
    }

    fn loaded(sequence: &RequestSequence, events: Vec<Event>) -> AppState {
        let mut state = AppState::default();
        state.apply(AppAction::EventsLoaded {
            ticket: sequence.next(),
            events,
        });
        state
    }

    #[test]
    fn test_empty_state() {
        let page = describe(&AppState::default());
        assert_eq!(page.title, "Event Planner");
        assert!(page.entries.is_empty());
        assert_eq!(page.details, DetailsView::Prompt(SELECT_PROMPT));
    }

    #[test]
    fn test_list_in_response_order_with_prompt() {
        let sequence = RequestSequence::default();
        let state = loaded(&sequence, vec![event(1, "A", "a"), event(2, "B", "b")]);

        let page = describe(&state);
        let labels: Vec<&str> = page.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(page.entries[1].id, 2);
        assert_eq!(page.entries[0].href(), "#selected");
        assert_eq!(page.details, DetailsView::Prompt("Please select an event to learn more."));
    }

    #[test]
    fn test_selection_shows_heading_and_description() {
        let sequence = RequestSequence::default();
        let mut state = loaded(&sequence, vec![event(1, "A", "a"), event(2, "B", "b")]);
        let before = describe(&state).entries;

        state.apply(AppAction::EventLoaded {
            ticket: sequence.next(),
            event: Some(event(2, "B", "d")),
        });

        let page = describe(&state);
        assert_eq!(page.entries, before);
        match page.details {
            DetailsView::Event { heading, description } => {
                assert_eq!(heading, "B #2");
                assert_eq!(description, "d");
            }
            other => panic!("expected event details, got {:?}", other),
        }
    }

    #[test]
    fn test_selection_outside_list_still_renders() {
        let sequence = RequestSequence::default();
        let mut state = loaded(&sequence, vec![event(1, "A", "a")]);
        state.apply(AppAction::EventLoaded {
            ticket: sequence.next(),
            event: Some(event(99, "Secret", "not listed")),
        });

        let page = describe(&state);
        assert_eq!(page.entries.len(), 1);
        assert_eq!(
            page.details,
            DetailsView::Event {
                heading: "Secret #99".to_string(),
                description: "not listed".to_string(),
            }
        );
    }

    #[test]
    fn test_reloading_identical_list_is_idempotent() {
        let sequence = RequestSequence::default();
        let events = vec![event(1, "A", "a"), event(2, "B", "b")];
        let mut state = loaded(&sequence, events.clone());
        let first = describe(&state);

        state.apply(AppAction::EventsLoaded {
            ticket: sequence.next(),
            events,
        });

        assert_eq!(describe(&state), first);
    }
}
