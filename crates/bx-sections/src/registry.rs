//! Component registry and loaders.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::kind::{ComponentEntry, SectionKind};

static BY_PATH: LazyLock<HashMap<&'static str, &'static ComponentEntry>> = LazyLock::new(|| {
    SectionKind::ALL
        .iter()
        .map(|kind| {
            let entry = kind.entry();
            (entry.path, entry)
        })
        .collect()
});

/// Error returned when a component cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No entry is registered under the path.
    #[error("Component not found: {0}")]
    NotFound(String),
    /// The entry exists but could not be made available.
    #[error("Failed to load component {path}: {reason}")]
    Failed { path: String, reason: String },
}

/// Resolves a registry path to a rendering entry.
///
/// Loaders are shared across threads; a failed load affects only the
/// section that asked for it.
pub trait ComponentLoader: Send + Sync {
    /// Load the entry registered under `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if no entry is registered under `path`.
    fn load(&self, path: &str) -> Result<&'static ComponentEntry, LoadError>;
}

/// Loader backed by the compiled-in registry.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticLoader;

impl ComponentLoader for StaticLoader {
    fn load(&self, path: &str) -> Result<&'static ComponentEntry, LoadError> {
        let Some(entry) = lookup(path) else {
            tracing::debug!(path, "No component registered");
            return Err(LoadError::NotFound(path.to_owned()));
        };
        tracing::trace!(path, kind = ?entry.kind, unit = entry.unit.name(), "Component loaded");
        Ok(entry)
    }
}

/// Entry registered under `path`, if any.
#[must_use]
pub fn lookup(path: &str) -> Option<&'static ComponentEntry> {
    BY_PATH.get(path).copied()
}

/// All registered entries, in listing order.
pub fn entries() -> impl Iterator<Item = &'static ComponentEntry> {
    SectionKind::ALL.iter().map(|kind| kind.entry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;

    #[test]
    fn test_static_loader_finds_registered_path() {
        let entry = StaticLoader.load("solution/payroll/PayrollFAQ").unwrap();

        assert_eq!(entry.kind, SectionKind::PayrollFaq);
        assert_eq!(entry.unit, Unit::Faq);
    }

    #[test]
    fn test_static_loader_unknown_path() {
        let err = StaticLoader.load("About/Nothing").unwrap_err();

        assert!(matches!(err, LoadError::NotFound(ref p) if p == "About/Nothing"));
        assert_eq!(err.to_string(), "Component not found: About/Nothing");
    }

    #[test]
    fn test_entries_cover_every_kind() {
        assert_eq!(entries().count(), SectionKind::ALL.len());
    }

    #[test]
    fn test_path_lookup_is_case_sensitive() {
        assert!(lookup("hero").is_none());
        assert!(lookup("Hero").is_some());
    }
}
