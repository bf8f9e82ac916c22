use path_echo::api::helpers::{err_response, not_found, ok_text};

/// Tests for the reply builders.
/// These verify that replies carry the proxy-integration shape the platform
/// expects: statusCode, headers and body.

#[test]
fn test_ok_text_reply_shape() {
    let reply = ok_text("Response inside of a Lambda on path x");

    // Convert to string for easy comparison
    let reply_str = serde_json::to_string(&reply).unwrap();

    assert!(
        reply_str.contains("\"statusCode\":200"),
        "Reply should carry a 200 status code"
    );
    assert!(
        reply_str.contains("\"body\":\"Response inside of a Lambda on path x\""),
        "Reply should carry the body verbatim"
    );
    assert!(
        reply_str.contains("text/plain; charset=utf-8"),
        "Reply should declare the plain-text content type"
    );
}

#[test]
fn test_not_found_reply() {
    let reply = not_found();

    assert_eq!(reply["statusCode"], 404);
    assert_eq!(reply["body"], "Not Found");
}

#[test]
fn test_err_response_embeds_status_and_message() {
    let reply = err_response(400, "Missing path");

    assert_eq!(reply["statusCode"], 400);

    let body = reply["body"].as_str().unwrap();
    assert!(
        body.contains("Missing path"),
        "Error body should carry the message"
    );
}

#[test]
fn test_replies_are_fresh_values() {
    // Builders construct a new mapping per call; mutating one reply must not
    // leak into the next
    let mut first = ok_text("a");
    first["statusCode"] = serde_json::json!(500);

    let second = ok_text("a");
    assert_eq!(second["statusCode"], 200);
}
