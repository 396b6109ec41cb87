//! Admin landing page: create elections and watch the current list.

use leptos::prelude::*;

use crate::components::create_election_form::CreateElectionForm;
use crate::components::election_list::ElectionList;
use crate::config::ViewConfig;
use crate::util::session::{document_cookie, guard_session};

/// Redirects to `/admin/login` without an admin session marker.
#[component]
pub fn AdminPage() -> impl IntoView {
    let config = ViewConfig::ADMIN;
    let allowed = guard_session(&config, &document_cookie());

    view! {
        <Show
            when=move || allowed
            fallback=|| view! { <p class="admin-page__redirect">"Redirecting to login..."</p> }
        >
            <main class="admin-page">
                <h1>"Create election"</h1>
                <CreateElectionForm config=config/>
                <h2>"Elections"</h2>
                <ElectionList config=config/>
            </main>
        </Show>
    }
}
