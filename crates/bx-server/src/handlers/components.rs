//! Components API endpoint.
//!
//! Lists the component registry and the legacy id map.

use std::collections::BTreeMap;

use axum::Json;
use bx_sections::{ComponentEntry, entries, legacy_ids, resolve_path};
use serde::Serialize;

/// Response for GET /api/components.
#[derive(Serialize)]
pub(crate) struct ComponentsResponse {
    /// Registry entries in listing order.
    components: Vec<ComponentResponse>,
    /// Legacy component id to registry path.
    legacy: BTreeMap<&'static str, &'static str>,
}

/// Registry entry for JSON response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentResponse {
    path: &'static str,
    unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    props_root: Option<&'static str>,
    legacy_ids: &'static [&'static str],
    required: &'static [&'static str],
}

impl From<&'static ComponentEntry> for ComponentResponse {
    fn from(entry: &'static ComponentEntry) -> Self {
        Self {
            path: entry.path,
            unit: entry.unit.name(),
            props_root: entry.props_root,
            legacy_ids: entry.legacy_ids,
            required: entry.required,
        }
    }
}

/// Handle GET /api/components.
pub(crate) async fn get_components() -> Json<ComponentsResponse> {
    Json(list_components())
}

fn list_components() -> ComponentsResponse {
    ComponentsResponse {
        components: entries().map(ComponentResponse::from).collect(),
        legacy: legacy_ids()
            .filter_map(|id| resolve_path(id).map(|path| (id, path)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_serialization() {
        let json = serde_json::to_value(list_components()).unwrap();

        let workflow = json["components"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["path"] == "solution/payroll/PayrollWorkflow")
            .unwrap();
        assert_eq!(workflow["unit"], "steps");
        assert_eq!(workflow["propsRoot"], "workflowData");
        assert_eq!(workflow["required"][0], "workflowData.steps");
        assert_eq!(
            json["legacy"]["PayrollWorkflowSection"],
            "solution/payroll/PayrollWorkflow"
        );
    }

    #[test]
    fn test_every_legacy_id_listed() {
        let response = list_components();

        assert_eq!(response.legacy.len(), legacy_ids().count());
    }
}
