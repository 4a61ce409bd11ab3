//! Debouncing of page update notifications.
//!
//! The page builder may signal several updates per edit; each slug is
//! refreshed once after the notifications for it go quiet.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Thread-safe per-slug debouncer.
pub(crate) struct UpdateDebouncer {
    pending: Mutex<HashMap<String, Instant>>,
    debounce_duration: Duration,
}

impl UpdateDebouncer {
    /// Create a new debouncer with the specified debounce duration.
    pub(crate) fn new(debounce_duration: Duration) -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            debounce_duration,
        }
    }

    /// Record an update for `slug`, pushing its deadline back.
    pub(crate) fn record(&self, slug: &str) {
        let deadline = Instant::now() + self.debounce_duration;
        self.pending
            .lock()
            .unwrap()
            .insert(slug.to_owned(), deadline);
    }

    /// Drain slugs whose deadline has passed.
    pub(crate) fn drain_ready(&self) -> Vec<String> {
        let mut pending = self.pending.lock().unwrap();
        let now = Instant::now();

        let mut ready = Vec::new();
        pending.retain(|slug, deadline| {
            if *deadline <= now {
                ready.push(slug.clone());
                false
            } else {
                true
            }
        });
        ready.sort();
        ready
    }
}
