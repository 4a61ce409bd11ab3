//! Preview manager.
//!
//! Drives a [`PageView`] from editor events and broadcasts a reload event
//! after every committed state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use bx_site::{PageView, Site, Snapshot};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::task::JoinError;

use super::debouncer::UpdateDebouncer;

/// Event sent to connected WebSocket clients when the preview changes.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct ReloadEvent {
    /// Event type (always "reload").
    #[serde(rename = "type")]
    event_type: String,
    /// URL path of the page now shown.
    path: String,
}

impl ReloadEvent {
    fn for_slug(slug: &str) -> Self {
        Self {
            event_type: "reload".to_owned(),
            path: format!("/{slug}"),
        }
    }
}

/// Event describing what the preview shows, sent to a client when it
/// connects or falls behind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct StateEvent {
    /// Event type (always "state").
    #[serde(rename = "type")]
    event_type: &'static str,
    /// Slug on screen, `None` before the first navigation.
    slug: Option<String>,
    /// Label of the page state.
    state: &'static str,
    /// Generation of the load behind the state.
    generation: u64,
}

impl StateEvent {
    pub(crate) fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            event_type: "state",
            slug: snapshot.slug.clone(),
            state: snapshot.state.label(),
            generation: snapshot.generation,
        }
    }

    /// Token identifying this state, embedded in the preview page so the
    /// client can tell whether it is out of date.
    pub(crate) fn token(&self) -> String {
        format!("{}-{}", self.generation, self.state)
    }
}

/// Manages the preview page view.
#[derive(Clone)]
pub(crate) struct PreviewManager {
    site: Arc<Site>,
    view: Arc<PageView>,
    broadcaster: broadcast::Sender<ReloadEvent>,
    debouncer: Arc<UpdateDebouncer>,
}

impl PreviewManager {
    /// Create a new preview manager.
    ///
    /// # Arguments
    ///
    /// * `site` - Site used to load previewed pages
    /// * `broadcaster` - Broadcast channel sender for reload events
    /// * `debounce` - Quiet period before an updated page is reloaded
    #[must_use]
    pub(crate) fn new(
        site: Arc<Site>,
        broadcaster: broadcast::Sender<ReloadEvent>,
        debounce: Duration,
    ) -> Self {
        Self {
            site,
            view: Arc::new(PageView::new()),
            broadcaster,
            debouncer: Arc::new(UpdateDebouncer::new(debounce)),
        }
    }

    /// Start refreshing pages whose updates have settled.
    ///
    /// Spawns a background task; must be called inside a tokio runtime.
    pub(crate) fn start(&self) {
        let manager = self.clone();
        let poll_interval = Duration::from_millis(50);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(poll_interval);

            loop {
                interval.tick().await;

                for slug in manager.debouncer.drain_ready() {
                    if manager.view.slug().as_deref() != Some(slug.as_str()) {
                        continue;
                    }
                    if let Err(e) = manager.navigate(&slug).await {
                        tracing::error!(slug = %slug, error = %e, "Preview refresh failed");
                    }
                }
            }
        });
    }

    /// Show `slug`, replacing whatever is on screen.
    ///
    /// Returns whether this load's result was committed. It is not when a
    /// newer navigation started while the page was loading.
    pub(crate) async fn navigate(&self, slug: &str) -> Result<bool, JoinError> {
        let start = Instant::now();
        let ticket = self.view.begin(slug);

        let site = Arc::clone(&self.site);
        let owned = slug.to_owned();
        let state = tokio::task::spawn_blocking(move || site.load(&owned)).await?;

        let committed = self.view.commit(&ticket, state);
        if committed {
            let _ = self.broadcaster.send(ReloadEvent::for_slug(slug));
            tracing::info!(
                slug,
                elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Preview updated"
            );
        }
        Ok(committed)
    }

    /// Note that the stored page for `slug` changed.
    ///
    /// Returns whether the preview shows `slug` and will refresh.
    pub(crate) fn page_updated(&self, slug: &str) -> bool {
        if self.view.slug().as_deref() != Some(slug) {
            tracing::debug!(slug, "Ignoring update for page not in preview");
            return false;
        }
        self.debouncer.record(slug);
        true
    }

    /// What the preview shows now.
    #[must_use]
    pub(crate) fn snapshot(&self) -> Snapshot {
        self.view.current()
    }

    /// State event for what the preview shows now.
    #[must_use]
    pub(crate) fn state_event(&self) -> StateEvent {
        StateEvent::from_snapshot(&self.view.current())
    }

    /// Site used to render the preview.
    #[must_use]
    pub(crate) fn site(&self) -> &Site {
        &self.site
    }

    /// Get a receiver for reload events.
    #[must_use]
    pub(crate) fn subscribe(&self) -> broadcast::Receiver<ReloadEvent> {
        self.broadcaster.subscribe()
    }
}
