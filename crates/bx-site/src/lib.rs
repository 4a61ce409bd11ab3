//! Page fetching, section loading and page state for BX.
//!
//! The load pipeline for one slug:
//!
//! 1. Fetch the page document from a [`PageSource`]
//! 2. Drop hidden sections
//! 3. Resolve and load every section's component in parallel, letting each
//!    attempt settle independently
//! 4. Freeze the results into a [`LoadedPage`]
//!
//! [`PageView`] tracks the page currently on screen and discards results of
//! loads that were superseded by a newer navigation. [`Site`] ties the
//! pipeline to the renderer.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use bx_sections::StaticLoader;
//! use bx_site::{HttpPageSource, Site};
//!
//! let source = HttpPageSource::new("http://localhost:5000", Duration::from_secs(30));
//! let site = Site::new(source, StaticLoader, "Bellatrix");
//! let page = site.render("home");
//! println!("{}", page.document().render());
//! ```

#[cfg(any(test, feature = "mock"))]
mod mock;
mod page;
mod pipeline;
mod site;
mod source;
mod state;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockPageSource;
pub use page::PageData;
pub use pipeline::{LoadedPage, load_page, resolve_sections};
pub use site::{PageStatus, RenderedPage, Site};
pub use source::{FetchError, HttpPageSource, PageSource};
pub use state::{PageState, PageView, Snapshot, Ticket};
