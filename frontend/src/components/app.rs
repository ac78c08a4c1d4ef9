use shared::EventId;
use yew::prelude::*;

use crate::components::{event_details::EventDetails, event_list::EventList};
use crate::services::{api::EventsApi, events::load_event};
use crate::state::{AppState, RequestSequence};
use crate::view::{describe, DETAILS_ANCHOR, DETAILS_HEADING, LIST_HEADING};

#[derive(Properties, PartialEq)]
pub struct AppProps<A: EventsApi + Clone + PartialEq + 'static> {
    pub api: A,
    pub sequence: RequestSequence,
    /// State after the startup fetch
    pub initial: AppState,
}

#[function_component(App)]
pub fn app<A>(props: &AppProps<A>) -> Html
where
    A: EventsApi + Clone + PartialEq + 'static,
{
    let state = {
        let initial = props.initial.clone();
        use_reducer(move || initial)
    };

    let on_select = {
        let api = props.api.clone();
        let sequence = props.sequence.clone();
        let dispatcher = state.dispatcher();

        Callback::from(move |id: EventId| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let ticket = sequence.next();

            wasm_bindgen_futures::spawn_local(async move {
                match load_event(&api, id, ticket).await {
                    Ok(action) => dispatcher.dispatch(action),
                    Err(e) => {
                        tracing::error!(event_id = id, "Failed to fetch event: {}", e);
                    }
                }
            });
        })
    };

    let page = describe(&state);

    html! {
        <>
            <h1>{ page.title }</h1>
            <main>
                <section>
                    <h2>{ LIST_HEADING }</h2>
                    <EventList entries={page.entries} {on_select} />
                </section>
                <section id={DETAILS_ANCHOR}>
                    <h2>{ DETAILS_HEADING }</h2>
                    <EventDetails details={page.details} />
                </section>
            </main>
        </>
    }
}
