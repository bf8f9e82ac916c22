//! Reply builders shared by the handlers.
//!
//! Replies use the Lambda proxy-integration shape: `statusCode`, `headers`
//! and `body`, built fresh per invocation.

use serde_json::{Value, json};

const CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Returns a 200 OK reply with a plain-text body.
#[must_use]
pub fn ok_text(body: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": { "Content-Type": CONTENT_TYPE },
        "body": body
    })
}

/// Returns the default 404 reply. Only the root path can get here; the
/// catch-all takes every other request.
#[must_use]
pub fn not_found() -> Value {
    json!({
        "statusCode": 404,
        "headers": { "Content-Type": CONTENT_TYPE },
        "body": "Not Found"
    })
}

/// Returns an error reply with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
