use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Hands out tickets for geocoding requests. Only the newest ticket may
/// publish results; anything older resolved too late and is dropped.
#[derive(Debug, Clone, Default)]
pub struct SearchSequence {
    latest: Arc<AtomicU64>,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Makes every outstanding ticket stale without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Starts a search for `text`. Blank text gets no ticket and makes every
    /// outstanding request stale; the caller clears its options.
    pub fn begin(&self, text: &str) -> Option<SearchTicket> {
        if text.trim().is_empty() {
            self.invalidate();
            None
        } else {
            Some(self.next())
        }
    }

    /// Hands `results` to `apply` only if `ticket` is still the newest.
    pub fn publish<T>(&self, ticket: SearchTicket, results: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current(ticket) {
            apply(results);
            true
        } else {
            false
        }
    }
}
