//! Live preview.
//!
//! The page builder navigates the preview with `POST /api/preview/{slug}` and
//! signals edits with `POST /api/pages/{slug}/updated`. Connected clients get
//! the current state over `/ws/preview` when they connect, then a reload
//! event whenever the previewed state changes.

mod debouncer;
mod manager;
mod websocket;

pub(crate) use manager::{PreviewManager, ReloadEvent, StateEvent};
pub(crate) use websocket::ws_handler;
