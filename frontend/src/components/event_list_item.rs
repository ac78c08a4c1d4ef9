use shared::EventId;
use yew::prelude::*;

use crate::view::ListEntry;

#[derive(Properties, PartialEq)]
pub struct EventListItemProps {
    pub entry: ListEntry,
    pub on_select: Callback<EventId>,
}

/// Event name that asks for the event's details when clicked
#[function_component(EventListItem)]
pub fn event_list_item(props: &EventListItemProps) -> Html {
    let entry = &props.entry;

    let onclick = {
        let on_select = props.on_select.clone();
        let id = entry.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_select.emit(id);
        })
    };

    html! {
        <li>
            <a href={entry.href()} {onclick}>{ &entry.label }</a>
        </li>
    }
}
