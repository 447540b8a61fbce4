// Trailing-edge debounce. Each call replaces the pending payload and
// re-arms the deadline; at most one execution fires per quiet window.
// Owns no timer: the caller polls from its tick loop.

use crate::types::Timestamp;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait_ms: u64,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    due: Timestamp,
    payload: T,
}

impl<T> Debouncer<T> {
    pub fn new(wait_ms: u64) -> Self {
        Debouncer {
            wait_ms,
            pending: None,
        }
    }

    /// Record a call. Any previously pending payload is discarded and the
    /// quiet window restarts from `now`.
    pub fn call(&mut self, now: Timestamp, payload: T) {
        self.pending = Some(Pending {
            due: now.offset_by(self.wait_ms),
            payload,
        });
    }

    /// Fire the trailing execution if the quiet window has elapsed.
    pub fn poll(&mut self, now: Timestamp) -> Option<T> {
        let due = self.pending.as_ref().map_or(false, |p| p.due <= now);
        if due {
            self.pending.take().map(|p| p.payload)
        } else {
            None
        }
    }

    /// Drop any pending execution.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.pending.as_ref().map(|p| p.due)
    }
}
