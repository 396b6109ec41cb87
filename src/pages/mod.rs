//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session guard, role config) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod elections;
pub mod login;
