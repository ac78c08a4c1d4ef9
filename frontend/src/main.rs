use event_planner::components::app::{App, AppProps};
use event_planner::config::{ApiConfig, MOUNT_POINT_ID};
use event_planner::services::{api::HttpEventsApi, events::initial_state};
use event_planner::state::RequestSequence;

/// Fetch the event list, then mount with whatever it produced.
async fn start() {
    let Some(root) = gloo::utils::document().get_element_by_id(MOUNT_POINT_ID) else {
        tracing::error!("No #{} element to mount into", MOUNT_POINT_ID);
        return;
    };

    let api = HttpEventsApi::new(ApiConfig::from_build_env());
    let sequence = RequestSequence::default();
    let initial = initial_state(&api, &sequence).await;

    yew::Renderer::<App<HttpEventsApi>>::with_root_and_props(
        root,
        AppProps {
            api,
            sequence,
            initial,
        },
    )
    .render();
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    wasm_bindgen_futures::spawn_local(start());
}
