//! Navigation requested by a state transition.

/// What the page should do after applying a server outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Followup {
    /// Stay on the page; any message is already in state.
    #[default]
    Stay,
    /// Session rejected: go to the role's login route.
    Login,
    /// Credentials accepted: go to the role's home route.
    Home,
}
