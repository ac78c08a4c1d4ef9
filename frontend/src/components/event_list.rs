use shared::EventId;
use yew::prelude::*;

use crate::components::event_list_item::EventListItem;
use crate::view::ListEntry;

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub entries: Vec<ListEntry>,
    pub on_select: Callback<EventId>,
}

#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    html! {
        <ul class="lineup">
            { for props.entries.iter().map(|entry| {
                html! {
                    <EventListItem
                        key={entry.id.to_string()}
                        entry={entry.clone()}
                        on_select={props.on_select.clone()}
                    />
                }
            })}
        </ul>
    }
}
