//! Password login page for participants and admins.

use leptos::prelude::*;

use crate::config::{Role, ViewConfig};
use crate::state::login::LoginState;

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let config = ViewConfig::for_role(role);
    let password = RwSignal::new(String::new());
    let login = RwSignal::new(LoginState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if login.try_update(LoginState::begin) != Some(true) {
            return;
        }
        let payload = crate::net::types::LoginPayload { password: password.get_untracked() };
        log::info!("{:?} login attempt", config.role);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::state::followup::Followup;
            use crate::state::login::LoginOutcome;

            let result = crate::net::api::post_json(config.login_endpoint, &payload).await;
            let mut followup = Followup::Stay;
            login.update(|l| followup = l.finish(LoginOutcome::classify(result)));
            crate::util::session::follow(&config, followup);
        });
        #[cfg(not(feature = "csr"))]
        drop(payload);
    };

    let title = match role {
        Role::Participant => "Log in",
        Role::Admin => "Admin log in",
    };

    view! {
        <main class="login-page">
            <h1>{title}</h1>
            <form id="login-form" class="login-form" on:submit=on_submit>
                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    name="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input type="submit" value="Log in" prop:disabled=move || login.with(|l| l.busy)/>
            </form>
            <p id="login-form-error-message" class="login-form__message">
                {move || login.with(|l| l.message.clone().unwrap_or_default())}
            </p>
        </main>
    }
}
