//! JSON-RPC request construction

use serde::Serialize;
use serde_json::{Map, Value};

/// Protocol version carried by every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// The only method this client calls.
pub const TOOLS_CALL_METHOD: &str = "tools/call";

/// At most one call is issued per process, so the id never varies.
pub const REQUEST_ID: u64 = 1;

/// `params` object of a `tools/call` request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCallParams {
    name: String,
    arguments: Map<String, Value>,
}

/// JSON-RPC `tools/call` request
///
/// Serializes to
/// `{"jsonrpc":"2.0","method":"tools/call","params":{"name":..,"arguments":..},"id":1}`.
/// Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolInvocationRequest {
    jsonrpc: &'static str,
    method: &'static str,
    params: ToolCallParams,
    id: u64,
}

impl ToolInvocationRequest {
    /// Build a request for `tool_name` with the given arguments.
    pub fn build(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: TOOLS_CALL_METHOD,
            params: ToolCallParams {
                name: tool_name.into(),
                arguments,
            },
            id: REQUEST_ID,
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.params.name
    }

    pub fn arguments(&self) -> &Map<String, Value> {
        &self.params.arguments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn build_sets_fixed_envelope_fields() {
        let request = ToolInvocationRequest::build(
            "create_project",
            args(json!({"title": "Health Tracker"})),
        );

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["method"], "tools/call");
        assert_eq!(wire["id"], 1);
        assert_eq!(wire["params"]["name"], "create_project");
        assert_eq!(wire["params"]["arguments"], json!({"title": "Health Tracker"}));
    }

    #[test]
    fn build_preserves_nested_argument_values() {
        let arguments = args(json!({
            "projectId": "p1",
            "options": {"dark": true, "sizes": [1, 2, 3]},
            "note": null
        }));
        let request = ToolInvocationRequest::build("generate_screen_from_text", arguments.clone());

        assert_eq!(request.tool_name(), "generate_screen_from_text");
        assert_eq!(request.arguments(), &arguments);
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["method"], TOOLS_CALL_METHOD);
        assert_eq!(wire["id"], REQUEST_ID);
    }

    #[test]
    fn build_is_repeatable() {
        let first = ToolInvocationRequest::build("list_projects", Map::new());
        let second = ToolInvocationRequest::build("list_projects", Map::new());
        assert_eq!(first, second);
    }

    #[test]
    fn empty_arguments_serialize_as_empty_object() {
        let request = ToolInvocationRequest::build("list_projects", Map::new());
        let text = serde_json::to_string(&request).unwrap();
        assert_eq!(
            text,
            r#"{"jsonrpc":"2.0","method":"tools/call","params":{"name":"list_projects","arguments":{}},"id":1}"#
        );
    }
}
