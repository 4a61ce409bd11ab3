//! Page state and the generation-guarded page view.

use std::sync::{Arc, RwLock};

use crate::pipeline::LoadedPage;

/// State of a page load.
#[derive(Clone, Debug)]
pub enum PageState {
    /// Fetch or component loads still in flight.
    Loading,
    /// Page fetched and every section load attempted.
    Ready(Arc<LoadedPage>),
    /// The backend has no such page.
    NotFound,
    /// Fetch failed; holds the error message.
    Error(String),
}

impl PageState {
    /// Whether the state is final for its load.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Short label for the state, as shown to preview clients.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::NotFound => "not-found",
            Self::Error(_) => "error",
        }
    }
}

/// Proof that a load was started, used to commit its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticket {
    slug: String,
    generation: u64,
}

impl Ticket {
    /// Slug the load was started for.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Copy of what the view shows.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Slug on screen, `None` before the first navigation.
    pub slug: Option<String>,
    /// State of that slug.
    pub state: PageState,
    /// Generation of the load that produced `state`.
    pub generation: u64,
}

/// The page currently on screen.
///
/// Every navigation starts a new generation. A load result is only applied
/// if no navigation happened since its load began, so a slow response for
/// an old slug can never replace a newer page.
///
/// # Example
///
/// ```ignore
/// let view = PageView::new();
/// let old = view.begin("about");
/// let new = view.begin("home");
/// assert!(!view.commit(&old, PageState::NotFound));
/// assert!(view.commit(&new, PageState::NotFound));
/// ```
#[derive(Debug)]
pub struct PageView {
    current: RwLock<Snapshot>,
}

impl Default for PageView {
    fn default() -> Self {
        Self::new()
    }
}

impl PageView {
    /// Create a view with nothing on screen.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Snapshot {
                slug: None,
                state: PageState::Loading,
                generation: 0,
            }),
        }
    }

    /// Start showing `slug`: bump the generation and enter `Loading`.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn begin(&self, slug: &str) -> Ticket {
        let mut current = self.current.write().unwrap();
        current.generation += 1;
        current.slug = Some(slug.to_owned());
        current.state = PageState::Loading;
        Ticket {
            slug: slug.to_owned(),
            generation: current.generation,
        }
    }

    /// Apply the result of the load behind `ticket`.
    ///
    /// Returns `false` and leaves the view untouched when a newer load has
    /// begun since.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn commit(&self, ticket: &Ticket, state: PageState) -> bool {
        let mut current = self.current.write().unwrap();
        if current.generation != ticket.generation {
            tracing::debug!(
                slug = %ticket.slug,
                stale = ticket.generation,
                current = current.generation,
                "Dropping stale page load"
            );
            return false;
        }
        current.state = state;
        true
    }

    /// What the view shows now.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn current(&self) -> Snapshot {
        self.current.read().unwrap().clone()
    }

    /// Slug on screen.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn slug(&self) -> Option<String> {
        self.current.read().unwrap().slug.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_initial_view_is_empty() {
        let view = PageView::new();

        let snapshot = view.current();

        assert!(snapshot.slug.is_none());
        assert!(matches!(snapshot.state, PageState::Loading));
        assert_eq!(snapshot.generation, 0);
    }

    #[test]
    fn test_begin_enters_loading() {
        let view = PageView::new();
        let ticket = view.begin("home");
        assert!(view.commit(&ticket, PageState::NotFound));

        let ticket = view.begin("about");

        let snapshot = view.current();
        assert_eq!(ticket.slug(), "about");
        assert_eq!(snapshot.slug.as_deref(), Some("about"));
        assert!(matches!(snapshot.state, PageState::Loading));
        assert_eq!(snapshot.generation, 2);
    }

    #[test]
    fn test_stale_commit_is_dropped() {
        let view = PageView::new();
        let old = view.begin("about");
        let new = view.begin("home");

        assert!(view.commit(&new, PageState::Error("boom".to_owned())));
        assert!(!view.commit(&old, PageState::NotFound));

        let snapshot = view.current();
        assert_eq!(snapshot.slug.as_deref(), Some("home"));
        assert!(matches!(snapshot.state, PageState::Error(ref m) if m == "boom"));
    }

    #[test]
    fn test_renavigating_to_same_slug_invalidates_older_load() {
        let view = PageView::new();
        let first = view.begin("home");
        let second = view.begin("home");

        assert!(!view.commit(&first, PageState::NotFound));
        assert!(view.commit(&second, PageState::NotFound));
    }

    #[test]
    fn test_only_latest_of_concurrent_loads_commits() {
        let view = Arc::new(PageView::new());
        let tickets: Vec<Ticket> = (0..8).map(|i| view.begin(&format!("page-{i}"))).collect();

        let handles: Vec<_> = tickets
            .into_iter()
            .map(|ticket| {
                let view = Arc::clone(&view);
                thread::spawn(move || view.commit(&ticket, PageState::NotFound))
            })
            .collect();
        let committed: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(committed.iter().filter(|c| **c).count(), 1);
        assert!(committed[7]);
        assert_eq!(view.slug().as_deref(), Some("page-7"));
    }

    #[test]
    fn test_is_settled() {
        assert!(!PageState::Loading.is_settled());
        assert!(PageState::NotFound.is_settled());
        assert!(PageState::Error(String::new()).is_settled());
    }

    #[test]
    fn test_label() {
        assert_eq!(PageState::Loading.label(), "loading");
        assert_eq!(PageState::NotFound.label(), "not-found");
        assert_eq!(PageState::Error("boom".to_owned()).label(), "error");
    }
}
