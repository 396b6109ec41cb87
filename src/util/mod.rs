//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, navigation,
//! timers) from page and component logic to improve reuse and testability.

pub mod poll;
pub mod session;
