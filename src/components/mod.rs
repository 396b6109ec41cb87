//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Components render from `state` models and own any per-instance signals.
//! Pages decide which components appear for which role.

pub mod create_election_form;
pub mod election_form;
pub mod election_list;
