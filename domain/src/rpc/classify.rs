//! HTTP response classification
//!
//! Covers the HTTP-aware tiers. Network failures never produce a status and
//! body, so the transport classifies those before calling in here.

use super::result::ToolInvocationResult;
use serde_json::Value;

/// JSON-RPC code for a body that could not be parsed.
pub const PARSE_ERROR_CODE: i64 = -32700;

/// Classify an HTTP status and raw body.
///
/// 1. status other than 200 → `TransportError` with the raw body
/// 2. `error` member present → `ProtocolError`
/// 3. otherwise → `Success` with the `result` member (`null` when absent)
pub fn classify_response(status: u16, body: &str) -> ToolInvocationResult {
    if status != 200 {
        return ToolInvocationResult::TransportError {
            status,
            body: body.to_string(),
        };
    }

    let mut response = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            return ToolInvocationResult::ProtocolError {
                code: PARSE_ERROR_CODE,
                message: "Parse error: response is not a JSON object".to_string(),
            };
        }
        Err(e) => {
            return ToolInvocationResult::ProtocolError {
                code: PARSE_ERROR_CODE,
                message: format!("Parse error: {}", e),
            };
        }
    };

    match response.get("error").filter(|e| !e.is_null()) {
        Some(error) => protocol_error(error),
        None => ToolInvocationResult::Success(response.remove("result").unwrap_or(Value::Null)),
    }
}

fn protocol_error(error: &Value) -> ToolInvocationResult {
    let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
    let message = match error.get("message").and_then(Value::as_str) {
        Some(m) => m.to_string(),
        None => error.to_string(),
    };
    ToolInvocationResult::ProtocolError { code, message }
}
