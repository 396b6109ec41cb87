//! Polled election list shared by participant and admin pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Starts one poll loop per mount: an immediate fetch, then one every
//! `config.poll_interval`. The loop stops on unmount, on `beforeunload`, and
//! on the first 401 (which also navigates to the login route, once).

use leptos::prelude::*;

use crate::components::election_form::ElectionForm;
use crate::config::ViewConfig;
use crate::state::elections::ElectionsState;

#[component]
pub fn ElectionList(config: ViewConfig) -> impl IntoView {
    let state = RwSignal::new(ElectionsState::default());

    #[cfg(feature = "csr")]
    start_polling(state, config);

    // Keyed on `redraws` so only successful refreshes rebuild the forms.
    let forms = Memo::new(move |_| state.with(|s| (s.redraws, s.forms.clone())));

    view! {
        <p id="elections-error-message" class="elections__error">
            {move || state.with(|s| s.error.clone().unwrap_or_default())}
        </p>
        <div id="elections" class="elections">
            {move || {
                forms
                    .get()
                    .1
                    .into_iter()
                    .map(|model| view! { <ElectionForm model=model config=config/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[cfg(feature = "csr")]
fn start_polling(state: RwSignal<ElectionsState>, config: ViewConfig) {
    use crate::util::poll::{PollHandle, run_poll_loop};

    let handle = PollHandle::new();
    let loop_handle = handle.clone();
    let tick_handle = handle.clone();
    leptos::task::spawn_local(async move {
        run_poll_loop(
            loop_handle,
            config.poll_interval,
            gloo_timers::future::sleep,
            move || leptos::task::spawn_local(refresh_elections(state, config, tick_handle.clone())),
        )
        .await;
    });

    let unload_handle = handle.clone();
    let listener = window_event_listener(leptos::ev::beforeunload, move |_| {
        if unload_handle.stop() {
            log::debug!("election polling stopped on unload");
        }
    });
    on_cleanup(move || {
        handle.stop();
        listener.remove();
    });
}

#[cfg(feature = "csr")]
async fn refresh_elections(state: RwSignal<ElectionsState>, config: ViewConfig, handle: crate::util::poll::PollHandle) {
    use crate::state::elections::{ListingOutcome, redirect_after_listing};

    let outcome = ListingOutcome::classify(crate::net::api::get(config.elections_endpoint).await);
    // Decided before the update, which is a no-op once the list is disposed.
    let followup = outcome.followup();
    state.update(|s| {
        s.apply(outcome);
    });
    if let Some(route) = redirect_after_listing(followup, &handle, config.login_route) {
        crate::util::session::redirect_to(route);
    }
}
