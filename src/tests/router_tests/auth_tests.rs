use crate::auth::sessions::load_user_from_session;
use crate::router::handle;
use crate::tests::utils::{
    body_string, form_body, now_unix, owner, owner_cookie, test_state, OUTAGE_EMAIL,
    OWNER_EMAIL, OWNER_PASSWORD,
};
use astra::{Body, Response};
use http::{Method, Request};
use std::sync::Arc;

fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

fn post_login(pairs: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body(pairs))
        .unwrap()
}

#[test]
fn login_page_loads_successfully() {
    let state = test_state(Arc::default());
    let req = Request::builder()
        .method(Method::GET)
        .uri("/login?next=/flow-builder")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Welcome Back"));
    assert!(body.contains("name=\"next\" value=\"/flow-builder\""));
}

#[test]
fn signed_in_user_is_sent_on_from_login() {
    let state = test_state(Arc::default());
    let req = Request::builder()
        .method(Method::GET)
        .uri("/login?next=/flow-builder")
        .header("Cookie", owner_cookie(&state))
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/flow-builder");
}

#[test]
fn good_credentials_start_a_session() {
    let state = test_state(Arc::default());
    let resp = handle(
        post_login(&[
            ("email", OWNER_EMAIL),
            ("password", OWNER_PASSWORD),
            ("next", "/dashboard"),
        ]),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/dashboard");

    let cookie = header(&resp, "Set-Cookie");
    assert!(cookie.contains("HttpOnly"));
    let token = cookie
        .strip_prefix("session=")
        .and_then(|rest| rest.split(';').next())
        .expect("session cookie");

    let user = state
        .db
        .with_conn(|conn| load_user_from_session(conn, token, now_unix()))
        .unwrap();
    assert_eq!(user, Some(owner()));
}

#[test]
fn offsite_next_falls_back_to_dashboard() {
    let state = test_state(Arc::default());
    let resp = handle(
        post_login(&[
            ("email", OWNER_EMAIL),
            ("password", OWNER_PASSWORD),
            ("next", "https://evil.test/"),
        ]),
        &state,
    )
    .unwrap();
    assert_eq!(header(&resp, "Location"), "/dashboard");
}

#[test]
fn bad_credentials_rerender_login_with_message() {
    let state = test_state(Arc::default());
    let resp = handle(
        post_login(&[("email", OWNER_EMAIL), ("password", "wrong")]),
        &state,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Set-Cookie"), "");
    let body = body_string(resp);
    assert!(body.contains("Invalid email or password"));
    assert!(body.contains(&format!("value=\"{OWNER_EMAIL}\"")));
}

#[test]
fn provider_outage_is_reported_generically() {
    let state = test_state(Arc::default());
    let resp = handle(
        post_login(&[("email", OUTAGE_EMAIL), ("password", "x")]),
        &state,
    )
    .unwrap();

    let body = body_string(resp);
    assert!(body.contains("Sign-in is unavailable right now"));
    assert!(!body.contains("upstream unavailable"));
}

#[test]
fn logout_revokes_session_and_clears_cookie() {
    let state = test_state(Arc::default());
    let cookie = owner_cookie(&state);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/logout")
        .header("Cookie", &cookie)
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/");
    assert!(header(&resp, "Set-Cookie").contains("Max-Age=0"));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/dashboard")
        .header("Cookie", &cookie)
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 302);
}
