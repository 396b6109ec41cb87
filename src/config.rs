//! Role-scoped view configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Participant and admin pages share one poll/render/vote pipeline. The only
//! differences are the session marker, routes, and endpoints, which live here
//! so pages never hard-code them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Interval between election listing refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Endpoint returning the current elections snapshot.
pub const ELECTIONS_ENDPOINT: &str = "/elections";

/// Endpoint accepting a participant's vote.
pub const VOTE_ENDPOINT: &str = "/elections/vote";

/// Endpoint accepting a new election from an admin.
pub const CREATE_ELECTION_ENDPOINT: &str = "/admin/create-election";

/// Which side of the application a page belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Participant,
    Admin,
}

/// Static per-role settings consumed by pages and the poller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    pub role: Role,
    /// Cookie whose presence marks a client-side session.
    pub session_cookie: &'static str,
    pub login_route: &'static str,
    pub home_route: &'static str,
    /// Credential submission endpoint used by the login page.
    pub login_endpoint: &'static str,
    pub elections_endpoint: &'static str,
    pub vote_endpoint: &'static str,
    pub poll_interval: Duration,
    /// Whether rendered election forms carry vote controls.
    pub voting_enabled: bool,
}

impl ViewConfig {
    pub const PARTICIPANT: Self = Self {
        role: Role::Participant,
        session_cookie: "coco_access_token",
        login_route: "/login",
        home_route: "/",
        login_endpoint: "/participants/add",
        elections_endpoint: ELECTIONS_ENDPOINT,
        vote_endpoint: VOTE_ENDPOINT,
        poll_interval: POLL_INTERVAL,
        voting_enabled: true,
    };

    pub const ADMIN: Self = Self {
        role: Role::Admin,
        session_cookie: "coco_admin_token",
        login_route: "/admin/login",
        home_route: "/admin",
        login_endpoint: "/admin/start-session",
        elections_endpoint: ELECTIONS_ENDPOINT,
        vote_endpoint: VOTE_ENDPOINT,
        poll_interval: POLL_INTERVAL,
        voting_enabled: false,
    };

    /// Configuration for `role`.
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Participant => Self::PARTICIPANT,
            Role::Admin => Self::ADMIN,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::PARTICIPANT
    }
}
