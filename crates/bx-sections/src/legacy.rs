//! Legacy flat component ids.
//!
//! Older pages carry only a `componentId` such as `PayrollFAQSection`. Each
//! kind declares the ids that used to name it; this module inverts that
//! into an id to path table.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::SectionKind;
use crate::section::Section;

static BY_ID: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    SectionKind::ALL
        .iter()
        .map(|kind| kind.entry())
        .flat_map(|entry| entry.legacy_ids.iter().map(move |id| (*id, entry.path)))
        .collect()
});

/// Registry path for a legacy component id.
#[must_use]
pub fn resolve_path(component_id: &str) -> Option<&'static str> {
    BY_ID.get(component_id).copied()
}

/// Path a section should be loaded from: its explicit path, else its
/// legacy id mapping.
#[must_use]
pub fn effective_path(section: &Section) -> Option<&str> {
    match section.component_path.as_deref() {
        Some(path) if !path.is_empty() => Some(path),
        _ => resolve_path(&section.component_id),
    }
}

/// Every known legacy id, in registry order.
pub fn legacy_ids() -> impl Iterator<Item = &'static str> {
    SectionKind::ALL
        .iter()
        .flat_map(|kind| kind.entry().legacy_ids.iter().copied())
}
