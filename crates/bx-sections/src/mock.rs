//! Loader double for tests.

use std::collections::HashSet;
use std::sync::Mutex;

use crate::kind::ComponentEntry;
use crate::registry::{ComponentLoader, LoadError, StaticLoader};

/// Loader that delegates to [`StaticLoader`] but fails chosen paths.
///
/// Records every requested path so tests can assert on load attempts.
#[derive(Debug, Default)]
pub struct MockLoader {
    failing: HashSet<String>,
    requested: Mutex<Vec<String>>,
}

impl MockLoader {
    /// Create a loader that fails nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make loads of `path` fail.
    #[must_use]
    pub fn failing(mut self, path: impl Into<String>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Paths requested so far, in call order.
    #[must_use]
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

impl ComponentLoader for MockLoader {
    fn load(&self, path: &str) -> Result<&'static ComponentEntry, LoadError> {
        if let Ok(mut paths) = self.requested.lock() {
            paths.push(path.to_owned());
        }
        if self.failing.contains(path) {
            return Err(LoadError::Failed {
                path: path.to_owned(),
                reason: "mock failure".to_owned(),
            });
        }
        StaticLoader.load(path)
    }
}
