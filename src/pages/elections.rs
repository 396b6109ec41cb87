//! Participant landing page: open elections with vote forms.

use leptos::prelude::*;

use crate::components::election_list::ElectionList;
use crate::config::ViewConfig;
use crate::util::session::{document_cookie, guard_session};

/// Lists elections for voting. Redirects to `/login` without a session marker.
#[component]
pub fn ElectionsPage() -> impl IntoView {
    let config = ViewConfig::PARTICIPANT;
    let allowed = guard_session(&config, &document_cookie());

    view! {
        <Show
            when=move || allowed
            fallback=|| view! { <p class="elections-page__redirect">"Redirecting to login..."</p> }
        >
            <main class="elections-page">
                <h1>"Elections"</h1>
                <ElectionList config=config/>
            </main>
        </Show>
    }
}
