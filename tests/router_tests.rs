use path_echo::routing::{Pattern, Router, service_router};

/// Tests for the routing core: the single greedy catch-all and the explicit
/// no-match for the root path.

#[test]
fn test_catch_all_captures_remainder_greedily() {
    let router = service_router();

    let matched = router.match_path("/hello/world").unwrap();
    assert_eq!(matched.name, "echo");
    assert_eq!(matched.text, "hello/world");
}

#[test]
fn test_catch_all_matches_single_segment() {
    let router = service_router();

    let matched = router.match_path("/x").unwrap();
    assert_eq!(matched.text, "x");
}

#[test]
fn test_capture_is_verbatim() {
    // No decoding, no trimming beyond the leading slash
    let router = service_router();

    let matched = router.match_path("/a%20b/c//d").unwrap();
    assert_eq!(matched.text, "a%20b/c//d");
}

#[test]
fn test_root_path_does_not_match() {
    let router = service_router();

    assert!(router.match_path("/").is_none());
    assert!(router.match_path("").is_none());
}

#[test]
fn test_empty_router_matches_nothing() {
    let router = Router::new();

    assert!(router.match_path("/hello").is_none());
}

#[test]
fn test_routes_are_tried_in_registration_order() {
    let router = Router::new()
        .route("first", Pattern::CatchAll)
        .route("second", Pattern::CatchAll);

    let matched = router.match_path("/anything").unwrap();
    assert_eq!(matched.name, "first");
}
