use crate::router::handle;
use crate::signup::notify::{INVALID_FORM, SUBMIT_FAILED, SUBMIT_SUCCEEDED};
use crate::signup::validation::{EMAIL_INVALID, FULL_NAME_REQUIRED};
use crate::tests::utils::{body_string, form_body, test_state, RecordingStore};
use astra::Body;
use http::{Method, Request};
use std::sync::Arc;

const VALID: &[(&str, &str)] = &[
    ("fullName", "Jane"),
    ("email", "jane@x.com"),
    ("phoneNumber", "+254 700 000 000"),
    ("preferredContact", "WhatsApp"),
    ("businessName", "Shop"),
    ("industrySector", "Retail"),
    ("companySize", "1-10"),
    ("businessLocation.country", "Kenya"),
    ("businessLocation.city", "Nairobi"),
    ("customerChannels", "WhatsApp"),
    ("customerChannels", "Walk-in"),
    ("customerEnquiries", "10-50"),
    ("expectations", "Take orders after hours"),
    ("feedbackPreference", "WhatsApp chat"),
    ("referralSource", "Friend/Colleague"),
    ("agreeToTerms", "on"),
];

fn post_signup(pairs: &[(&str, &str)], htmx: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/signup")
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder.body(form_body(pairs)).unwrap()
}

#[test]
fn invalid_submission_shows_inline_errors_and_skips_backend() {
    let store = Arc::new(RecordingStore::default());
    let state = test_state(store.clone());

    let pairs = [
        ("fullName", ""),
        ("email", "bad"),
        ("businessName", "Shop"),
        ("businessLocation.city", "Nairobi"),
        ("agreeToTerms", "on"),
    ];
    let resp = handle(post_signup(&pairs, true), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert_eq!(store.calls(), 0);
    assert!(body.contains(FULL_NAME_REQUIRED));
    assert!(body.contains(EMAIL_INVALID));
    assert!(body.contains(INVALID_FORM));
    assert_eq!(body.matches("class=\"field-error\"").count(), 2);
    // entered values survive the round trip
    assert!(body.contains("value=\"bad\""));
    assert!(body.contains("value=\"Shop\""));
    // partial for HTMX, not a full document
    assert!(!body.contains("<!DOCTYPE html>"));
}

#[test]
fn valid_submission_stores_row_and_shows_thank_you() {
    let store = Arc::new(RecordingStore::default());
    let state = test_state(store.clone());

    let resp = handle(post_signup(VALID, true), &state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("Thank You!"));
    assert!(body.contains(SUBMIT_SUCCEEDED));
    assert_eq!(body.matches("class=\"toast success\"").count(), 1);
    assert!(!body.contains("Submit Application"));

    assert_eq!(store.calls(), 1);
    let rows = store.rows.lock().unwrap();
    let row = &rows[0];
    assert_eq!(row["full_name"], "Jane");
    assert_eq!(row["email"], "jane@x.com");
    assert_eq!(row["business_location"]["city"], "Nairobi");
    assert_eq!(row["business_location"]["country"], "Kenya");
    assert_eq!(row["customer_channels"], serde_json::json!(["WhatsApp", "Walk-in"]));
    assert_eq!(row["referral_source"], "Friend/Colleague");
    assert_eq!(row["share_data"], false);
}

#[test]
fn backend_failure_keeps_form_editable() {
    let store = Arc::new(RecordingStore {
        fail: true,
        ..RecordingStore::default()
    });
    let state = test_state(store.clone());

    let resp = handle(post_signup(VALID, true), &state).unwrap();
    let body = body_string(resp);

    assert_eq!(store.calls(), 1);
    assert!(body.contains(SUBMIT_FAILED));
    assert_eq!(body.matches("class=\"toast error\"").count(), 1);
    assert!(!body.contains("Thank You!"));
    assert!(body.contains("value=\"Jane\""));
    assert!(body.contains("Submit Application"));
    // transport detail stays in the logs
    assert!(!body.contains("connection reset"));
}

#[test]
fn non_htmx_submission_gets_full_page() {
    let state = test_state(Arc::default());
    let resp = handle(post_signup(VALID, false), &state).unwrap();
    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Thank You!"));
}

#[test]
fn unknown_option_is_bad_request() {
    let state = test_state(Arc::default());
    let pairs = [("fullName", "Jane"), ("companySize", "9000")];
    match handle(post_signup(&pairs, true), &state) {
        Err(crate::errors::ServerError::BadRequest(msg)) => assert!(msg.contains("companySize")),
        other => panic!("expected BadRequest, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn oversized_body_is_rejected() {
    let state = test_state(Arc::default());
    let huge = "x".repeat(70 * 1024);
    let pairs = [("expectations", huge.as_str())];
    assert!(matches!(
        handle(post_signup(&pairs, true), &state),
        Err(crate::errors::ServerError::BadRequest(_))
    ));
}

fn post_field_edit(field: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/signup/field")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .header("HX-Trigger-Name", field)
        .body(form_body(pairs))
        .unwrap()
}

#[test]
fn editing_a_field_clears_its_inline_error() {
    let store = Arc::new(RecordingStore::default());
    let state = test_state(store.clone());

    let invalid = [
        ("fullName", ""),
        ("email", "bad"),
        ("businessName", "Shop"),
        ("businessLocation.city", "Nairobi"),
        ("agreeToTerms", "on"),
    ];
    let body = body_string(handle(post_signup(&invalid, true), &state).unwrap());
    assert!(body.contains("name=\"shownErrors\" value=\"fullName\""));
    assert!(body.contains("name=\"shownErrors\" value=\"email\""));
    assert!(body.contains("hx-trigger=\"change\""));

    // the browser posts the whole form, hidden inputs included
    let edited = [
        ("fullName", ""),
        ("email", "still-bad"),
        ("businessName", "Shop"),
        ("businessLocation.city", "Nairobi"),
        ("agreeToTerms", "on"),
        ("shownErrors", "fullName"),
        ("shownErrors", "email"),
    ];
    let resp = handle(post_field_edit("email", &edited), &state).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains(FULL_NAME_REQUIRED));
    assert!(!body.contains(EMAIL_INVALID));
    assert_eq!(body.matches("class=\"field-error\"").count(), 1);
    assert!(body.contains("value=\"still-bad\""));
    assert!(body.contains("name=\"shownErrors\" value=\"fullName\""));
    assert!(!body.contains("name=\"shownErrors\" value=\"email\""));
    assert_eq!(store.calls(), 0);
}

#[test]
fn field_edit_without_known_trigger_is_bad_request() {
    let state = test_state(Arc::default());
    assert!(matches!(
        handle(post_field_edit("hx-nonsense", &[("fullName", "Jane")]), &state),
        Err(crate::errors::ServerError::BadRequest(_))
    ));
}
