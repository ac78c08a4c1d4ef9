//! Application state: the fetched event list and the current selection.
//!
//! Each slot only accepts results for requests newer than the last result it
//! applied, so a slow response for an earlier click can never replace the
//! details of a later one.

use std::cell::Cell;
use std::rc::Rc;

use shared::Event;
use yew::Reducible;

/// Sequence number attached to a request when it is issued.
///
/// `RequestTicket::default()` is older than every issued ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Shared counter handing out increasing tickets.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence(Rc<Cell<u64>>);

impl RequestSequence {
    pub fn next(&self) -> RequestTicket {
        let next = self.0.get() + 1;
        self.0.set(next);
        RequestTicket(next)
    }
}

impl PartialEq for RequestSequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// A list fetch completed; replaces the whole list.
    EventsLoaded {
        ticket: RequestTicket,
        events: Vec<Event>,
    },
    /// A single-event fetch completed; replaces the selection.
    /// `None` means the API answered without a payload.
    EventLoaded {
        ticket: RequestTicket,
        event: Option<Event>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    events: Vec<Event>,
    selected: Option<Event>,
    events_ticket: RequestTicket,
    selection_ticket: RequestTicket,
}

impl AppState {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn selected(&self) -> Option<&Event> {
        self.selected.as_ref()
    }

    /// Apply an action in place. Returns `false` when the action was stale
    /// and the state is unchanged.
    pub fn apply(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::EventsLoaded { ticket, events } => {
                if ticket <= self.events_ticket {
                    tracing::debug!(
                        ticket = ticket.value(),
                        latest = self.events_ticket.value(),
                        "Discarding stale event list"
                    );
                    return false;
                }
                self.events_ticket = ticket;
                self.events = events;
                true
            }
            AppAction::EventLoaded { ticket, event } => {
                if ticket <= self.selection_ticket {
                    tracing::debug!(
                        ticket = ticket.value(),
                        latest = self.selection_ticket.value(),
                        "Discarding stale event details"
                    );
                    return false;
                }
                self.selection_ticket = ticket;
                self.selected = event;
                true
            }
        }
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
