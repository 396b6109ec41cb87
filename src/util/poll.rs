//! Repeating refresh loop with explicit start/stop ownership.
//!
//! SYSTEM CONTEXT
//! ==============
//! The election pages refresh on a fixed interval. The loop itself is generic
//! over the sleep future and the tick launcher so the browser build plugs in
//! `gloo-timers` and `spawn_local` while tests drive it on a local executor.
//!
//! TRADE-OFFS
//! ==========
//! No backoff or jitter: a failing endpoint is polled at the same cadence as a
//! healthy one. Ticks may overlap when a request outlives the interval, and
//! in-flight ticks are not cancelled; stopping only prevents the next one
//! from starting.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared liveness flag for one polling loop.
///
/// Clones observe the same flag; the page keeps one clone for unload/cleanup
/// and the loop keeps another.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl Default for PollHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl PollHandle {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_running(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Stop the loop. Returns `true` only for the call that actually stopped it.
    pub fn stop(&self) -> bool {
        self.alive.swap(false, Ordering::Relaxed)
    }
}

/// Start `tick` immediately, then once per `interval` until `handle` stops.
///
/// `tick` only launches the work (the browser build hands it to
/// `spawn_local`), so a slow or hung request never delays the next tick.
/// The handle is checked after every wait, so a stop issued while sleeping
/// prevents any further tick. Returns the number of ticks started.
pub async fn run_poll_loop<S, SF, T>(handle: PollHandle, interval: Duration, mut sleep: S, mut tick: T) -> usize
where
    S: FnMut(Duration) -> SF,
    SF: Future<Output = ()>,
    T: FnMut(),
{
    let mut ticks = 0;
    while handle.is_running() {
        tick();
        ticks += 1;
        sleep(interval).await;
    }
    log::debug!("poll loop stopped after {ticks} ticks");
    ticks
}
