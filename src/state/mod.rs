//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`elections`, `vote`, `login`, `admin`) as plain
//! structs with explicit transitions. Pages wrap them in signals; tests drive
//! them directly.

pub mod admin;
pub mod elections;
pub mod followup;
pub mod login;
pub mod vote;
