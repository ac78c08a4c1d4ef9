use yew::prelude::*;

use crate::view::DetailsView;

#[derive(Properties, PartialEq)]
pub struct EventDetailsProps {
    pub details: DetailsView,
}

#[function_component(EventDetails)]
pub fn event_details(props: &EventDetailsProps) -> Html {
    match &props.details {
        DetailsView::Prompt(prompt) => html! {
            <p>{ *prompt }</p>
        },
        DetailsView::Event { heading, description } => html! {
            <section class="event">
                <h3>{ heading }</h3>
                <p>{ description }</p>
            </section>
        },
    }
}
