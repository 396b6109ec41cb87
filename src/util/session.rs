//! Session marker check and login redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The marker cookie only says a session probably exists. The server remains
//! the authority and answers 401 on expired or forged sessions, which each
//! fetch call site turns into [`redirect_to`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::ViewConfig;
use crate::state::followup::Followup;

/// Whether any `;`-separated segment of `cookies` starts with `marker`.
///
/// Presence only: the cookie value and expiry are not inspected.
pub fn has_session_marker(cookies: &str, marker: &str) -> bool {
    !marker.is_empty() && cookies.split(';').any(|c| c.trim().starts_with(marker))
}

/// Read `document.cookie`. Empty outside the browser.
pub fn document_cookie() -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return String::new();
        };
        match document.dyn_into::<web_sys::HtmlDocument>() {
            Ok(html) => html.cookie().unwrap_or_default(),
            Err(_) => String::new(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Navigate the page to `path`.
pub fn redirect_to(path: &str) {
    log::info!("redirecting to {path}");
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::warn!("navigation to {path} failed: {e:?}");
            }
        }
    }
}

/// Redirect to the role's login route when no session marker is present.
///
/// Returns `true` when the page may continue initializing.
pub fn guard_session(config: &ViewConfig, cookies: &str) -> bool {
    if has_session_marker(cookies, config.session_cookie) {
        return true;
    }
    redirect_to(config.login_route);
    false
}

/// Perform the navigation a state transition asked for.
pub fn follow(config: &ViewConfig, followup: Followup) {
    match followup {
        Followup::Stay => {}
        Followup::Login => redirect_to(config.login_route),
        Followup::Home => redirect_to(config.home_route),
    }
}
