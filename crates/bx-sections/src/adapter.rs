//! Declarative prop adapters.
//!
//! CMS editors store props in whatever shape the page builder produced at the
//! time, so the same kind can arrive as `{title, subtitle, workflow}` or as
//! `{workflowData: {title, description, steps}}`. An adapter is a list of
//! [`Binding`]s; each binding fills one target path in the output from the
//! first present source path of the input.
//!
//! Every binding consults its own target path before its sources, so applying
//! an adapter to its own output yields the same output.

use serde_json::Value;

use crate::section::Props;
use crate::{SectionKind, resolve_path};

/// Which input values a binding accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Accept {
    /// Any non-null value other than the empty string.
    Any,
    /// Non-empty strings and numbers.
    Text,
    /// Arrays only.
    List,
}

/// One target path of an adapter's output.
#[derive(Clone, Copy, Debug)]
pub struct Binding {
    target: &'static str,
    sources: &'static [&'static str],
    accept: Accept,
    fallback: Option<&'static str>,
}

impl Binding {
    /// Bind any present value.
    #[must_use]
    pub const fn any(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self {
            target,
            sources,
            accept: Accept::Any,
            fallback: None,
        }
    }

    /// Bind a text value.
    #[must_use]
    pub const fn text(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self {
            target,
            sources,
            accept: Accept::Text,
            fallback: None,
        }
    }

    /// Bind a list value.
    #[must_use]
    pub const fn list(target: &'static str, sources: &'static [&'static str]) -> Self {
        Self {
            target,
            sources,
            accept: Accept::List,
            fallback: None,
        }
    }

    /// Text written when no source is present.
    #[must_use]
    pub const fn or(mut self, fallback: &'static str) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Output path, dot-separated.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }

    fn accepts(&self, value: &Value) -> bool {
        match self.accept {
            Accept::Any => !is_blank(value),
            Accept::Text => match value {
                Value::String(s) => !s.is_empty(),
                Value::Number(_) => true,
                _ => false,
            },
            Accept::List => value.is_array(),
        }
    }

    fn resolve(&self, input: &Props) -> Option<Value> {
        std::iter::once(self.target)
            .chain(self.sources.iter().copied())
            .filter_map(|path| lookup(input, path))
            .find(|value| self.accepts(value))
            .cloned()
            .or_else(|| self.fallback.map(Value::from))
    }
}

/// Result of checking a section's shaped props against its required paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    /// Required paths that are absent or empty.
    pub missing: Vec<&'static str>,
}

impl Validation {
    /// Whether every required path is present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Reshape a raw prop bag into the form expected by the kind behind `component_id`.
///
/// Ids without a registered kind pass through unchanged.
#[must_use]
pub fn transform(component_id: &str, props: &Props) -> Props {
    match kind_for(component_id) {
        Some(kind) => kind.entry().shape(props),
        None => props.clone(),
    }
}

/// Report required paths missing from already shaped props.
///
/// Ids without a registered kind have no requirements.
#[must_use]
pub fn validate(component_id: &str, props: &Props) -> Validation {
    kind_for(component_id).map_or_else(Validation::default, |kind| kind.entry().validate(props))
}

fn kind_for(component_id: &str) -> Option<SectionKind> {
    resolve_path(component_id).and_then(SectionKind::from_path)
}

pub(crate) fn missing(required: &[&'static str], shaped: &Props) -> Validation {
    let missing = required
        .iter()
        .copied()
        .filter(|path| lookup(shaped, path).is_none_or(is_empty))
        .collect();
    Validation { missing }
}

pub(crate) fn apply(bindings: &[Binding], input: &Props) -> Props {
    let mut output = Props::new();
    for binding in bindings {
        if let Some(value) = binding.resolve(input) {
            insert(&mut output, binding.target, value);
        }
    }
    output
}

/// Look up a dot-separated path. Numeric segments index into arrays.
fn lookup<'a>(props: &'a Props, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = props.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Write `value` at a dot-separated path, creating objects along the way.
fn insert(props: &mut Props, path: &str, value: Value) {
    let (parents, leaf) = match path.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, path),
    };
    let mut current = props;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        let slot = current
            .entry(segment)
            .or_insert_with(|| Value::Object(Props::new()));
        if !slot.is_object() {
            *slot = Value::Object(Props::new());
        }
        let Some(map) = slot.as_object_mut() else {
            return;
        };
        current = map;
    }
    current.insert(leaf.to_owned(), value);
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        other => is_blank(other),
    }
}
