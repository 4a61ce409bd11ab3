//! HTML rendering for BX pages.
//!
//! Turns an ordered list of sections plus their resolved registry entries
//! into HTML. Each resolved section is drawn by the rendering unit of its
//! kind; anything else degrades to a generic fallback block that shows
//! whatever well-known props it can find.
//!
//! # Example
//!
//! ```
//! use bx_renderer::{ResolvedSections, render_sections};
//! use bx_sections::{ComponentLoader, Section, StaticLoader};
//! use serde_json::json;
//!
//! let props = json!({"title": "Go", "ctaButton": {"text": "Go"}});
//! let section = Section::new("s1", "PayrollCTASection", props.as_object().unwrap().clone());
//!
//! let mut resolved = ResolvedSections::new();
//! resolved.insert("s1", StaticLoader.load("solution/payroll/PayrollCTA").unwrap());
//!
//! let html = render_sections(&[section], &resolved);
//! assert_eq!(html.matches("Go").count(), 2);
//! ```

mod document;
mod fallback;
mod html;
mod page;
mod screens;
mod units;

pub use document::Document;
pub use fallback::{NOT_FOUND_ANNOTATION, render_fallback};
pub use html::escape_html;
pub use page::{EMPTY_STATE, ResolvedSections, render_section, render_sections};
pub use screens::{render_error, render_loading, render_not_found};
pub use units::UnitError;
