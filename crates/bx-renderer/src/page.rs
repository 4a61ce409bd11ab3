//! Page body rendering.

use std::collections::HashMap;
use std::fmt::Write;

use bx_sections::{ComponentEntry, Section};
use serde_json::Value;

use crate::fallback::render_fallback;
use crate::html::escape_html;
use crate::units::render_unit;

/// Heading of the empty-page state.
pub const EMPTY_STATE: &str = "No sections found";

/// Rendering entries resolved for one load of a page, keyed by section uid.
///
/// Built once per load and never mutated afterwards; a new load builds a
/// new map.
#[derive(Clone, Debug, Default)]
pub struct ResolvedSections {
    by_uid: HashMap<String, &'static ComponentEntry>,
}

impl ResolvedSections {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the entry for `uid`, returning the entry it replaced.
    pub fn insert(
        &mut self,
        uid: impl Into<String>,
        entry: &'static ComponentEntry,
    ) -> Option<&'static ComponentEntry> {
        self.by_uid.insert(uid.into(), entry)
    }

    /// Entry resolved for `uid`.
    #[must_use]
    pub fn get(&self, uid: &str) -> Option<&'static ComponentEntry> {
        self.by_uid.get(uid).copied()
    }

    /// Number of resolved sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_uid.len()
    }

    /// Whether no section was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_uid.is_empty()
    }
}

/// Render the visible sections of a page in stored order.
///
/// A page without visible sections renders the empty state.
#[must_use]
pub fn render_sections(sections: &[Section], resolved: &ResolvedSections) -> String {
    let mut out = String::new();
    for section in sections.iter().filter(|s| s.visible()) {
        render_section(section, resolved.get(&section.uid), &mut out);
    }
    if out.is_empty() {
        render_empty(&mut out);
    }
    out
}

/// Render one section, wrapped in its `<section>` element.
///
/// Sections without an entry, or whose props the unit cannot read, render
/// the fallback block.
pub fn render_section(section: &Section, entry: Option<&ComponentEntry>, out: &mut String) {
    write!(
        out,
        r#"<section data-uid="{}" data-theme="{}">"#,
        escape_html(&section.uid),
        section.theme.as_str()
    )
    .unwrap();
    match entry {
        Some(entry) => {
            let shaped = Value::Object(entry.shape(&section.props));
            if let Err(err) = render_unit(entry, &shaped, out) {
                tracing::warn!(
                    uid = %section.uid,
                    component_id = %section.component_id,
                    path = entry.path,
                    error = %err,
                    "Section props unreadable, rendering fallback"
                );
                render_fallback(section, out);
            }
        }
        None => render_fallback(section, out),
    }
    out.push_str("</section>");
}

fn render_empty(out: &mut String) {
    write!(
        out,
        r#"<div class="empty-state"><h3>{EMPTY_STATE}</h3><p>This page doesn't have any sections yet.</p></div>"#
    )
    .unwrap();
}
