use serde_json::Value;

/// Extract the request path from an API Gateway proxy event.
///
/// HTTP API (v2) payloads carry `rawPath`; REST API (v1) payloads carry
/// `path`. Tried in that order, returned as delivered.
pub fn request_path(payload: &Value) -> Option<&str> {
    payload
        .get("rawPath")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("path").and_then(|v| v.as_str()))
}
