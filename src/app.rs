//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::Role;
use crate::pages::{admin::AdminPage, elections::ElectionsPage, login::LoginPage};

/// Root application component.
///
/// Participant routes live at `/` and `/login`; admin routes under `/admin`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="CoCo"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ElectionsPage/>
                <Route path=StaticSegment("login") view=|| view! { <LoginPage role=Role::Participant/> }/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("login"))
                    view=|| view! { <LoginPage role=Role::Admin/> }
                />
            </Routes>
        </Router>
    }
}
