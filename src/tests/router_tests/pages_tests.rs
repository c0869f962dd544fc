use crate::router::handle;
use crate::tests::utils::{body_string, owner_cookie, test_state, RecordingStore};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn marketing_pages_render() {
    let state = test_state(Arc::default());

    for (path, marker) in [
        ("/", "Biz yako iendelee"),
        ("/demo", "Restaurant Booking"),
        ("/pricing", "Msingi"),
        ("/faq", "Frequently Asked Questions"),
        ("/privacy-policy", "Privacy Policy"),
        ("/terms-of-service", "African Phoenix Ltd"),
        ("/signup", "Join SasaBot Beta Program"),
    ] {
        let resp = handle(get(path), &state).expect("Failed to handle request");
        assert_eq!(resp.status(), 200, "{path}");
        let body = body_string(resp);
        assert!(body.contains(marker), "{path} should mention {marker}");
        assert!(body.contains("<!DOCTYPE html>"), "{path} is a full page");
    }
}

#[test]
fn pricing_switches_to_yearly() {
    let state = test_state(Arc::default());
    let resp = handle(get("/pricing?billing=yearly"), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("KES 215,999"));
    assert!(body.contains("/year"));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state(Arc::default());
    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let ct = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("text/css"));
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state(Arc::default());
    match handle(get("/admin"), &state) {
        Err(crate::errors::ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn guarded_pages_redirect_anonymous_visitors() {
    let state = test_state(Arc::default());

    for (path, target) in [
        ("/dashboard", "/login?next=/dashboard"),
        ("/flow-builder", "/login?next=/flow-builder"),
    ] {
        let resp = handle(get(path), &state).unwrap();
        assert_eq!(resp.status(), 302);
        let loc = resp
            .headers()
            .get("Location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        assert_eq!(loc, target);
    }
}

#[test]
fn guarded_pages_render_for_signed_in_user() {
    let state = test_state(Arc::<RecordingStore>::default());
    let cookie = owner_cookie(&state);

    let req = Request::builder()
        .method(Method::GET)
        .uri("/dashboard")
        .header("Cookie", &cookie)
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Welcome back!"));
    assert!(body.contains("Total Conversations"));
    assert!(body.contains("owner@shop.co.ke"));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/flow-builder")
        .header("Cookie", &cookie)
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &state).unwrap());
    assert!(body.contains("data-node-id=\"1\""));
    assert!(body.contains("Start"));
}
