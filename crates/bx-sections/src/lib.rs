//! Section kinds, component registry and prop adapters for BX.
//!
//! A page is an ordered list of [`Section`]s. Each section names a rendering
//! unit either through an explicit `componentPath` or through its legacy flat
//! `componentId`. This crate owns everything needed to go from that data to a
//! concrete [`ComponentEntry`]:
//!
//! - [`SectionKind`]: one variant per registry path, each with its own entry
//! - [`resolve_path`]: legacy `componentId` to registry path translation
//! - [`ComponentLoader`]: path to entry lookup, with [`StaticLoader`] as the
//!   production implementation
//! - [`transform`]: per-kind reshaping of the free-form prop bag into the
//!   shape the rendering unit reads
//!
//! # Example
//!
//! ```
//! use bx_sections::{ComponentLoader, StaticLoader, resolve_path, transform};
//! use serde_json::json;
//!
//! let path = resolve_path("PayrollWorkflowSection").unwrap();
//! assert_eq!(path, "solution/payroll/PayrollWorkflow");
//!
//! let entry = StaticLoader.load(path).unwrap();
//! assert_eq!(entry.props_root, Some("workflowData"));
//!
//! let props = json!({"title": "Flow", "subtitle": "How", "workflow": ["a", "b"]});
//! let shaped = transform("PayrollWorkflowSection", props.as_object().unwrap());
//! assert_eq!(shaped["workflowData"]["description"], "How");
//! ```

mod adapter;
mod kind;
mod kinds;
mod legacy;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod registry;
mod section;

pub use adapter::{Binding, Validation, transform, validate};
pub use kind::{ComponentEntry, SectionKind, Unit};
pub use legacy::{effective_path, legacy_ids, resolve_path};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockLoader;
pub use registry::{ComponentLoader, LoadError, StaticLoader, entries, lookup};
pub use section::{Props, Section, Theme};
