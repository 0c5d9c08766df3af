// src/tests/router_tests/properties_tests.rs

use crate::router::{handle, respond};
use crate::sheets::SheetsError;
use crate::tests::utils::{body_json, configured, get, state_with, test_config, FakeSheet, SAMPLE_ROWS};
use serde_json::json;

#[test]
fn properties_returns_available_rows_with_diagnostics() {
    let sheet = FakeSheet::with_rows(SAMPLE_ROWS);
    let state = state_with(configured(), sheet.clone());

    let resp = handle(get("/api/properties"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body = body_json(resp);
    assert_eq!(
        body,
        json!({
            "properties": [
                { "CODE": "MAD-1", "AVAILABLE": "Yes", "Location": "Madrid", "Price": "1450", "Beds": "2" },
                { "CODE": "ROM-3", "AVAILABLE": " YES ", "Location": "Rome", "Price": "1200", "Beds": "" }
            ],
            "count": 2,
            "debug": {
                "totalRows": 4,
                "headers": ["CODE", "AVAILABLE", "Location", "Price", "Beds"],
                "filteredCount": 2
            }
        })
    );
    assert_eq!(sheet.calls(), 1);
}

#[test]
fn empty_sheet_is_success_with_no_properties() {
    let sheet = FakeSheet::with_rows(&[]);
    let state = state_with(configured(), sheet);

    let resp = handle(get("/api/properties"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), json!({ "properties": [], "count": 0 }));
}

#[test]
fn header_only_sheet_returns_zero_count() {
    let sheet = FakeSheet::with_rows(&[&["CODE", "AVAILABLE"]]);
    let state = state_with(configured(), sheet);

    let body = body_json(respond(get("/api/properties"), &state));
    assert_eq!(body["count"], 0);
    assert_eq!(body["debug"]["totalRows"], 1);
}

#[test]
fn missing_sheet_id_is_reported_without_reading() {
    let sheet = FakeSheet::with_rows(SAMPLE_ROWS);
    let state = state_with(test_config(&[]), sheet.clone());

    let resp = respond(get("/api/properties"), &state);
    assert_eq!(resp.status(), 500);
    assert_eq!(
        body_json(resp),
        json!({ "error": "Google Sheet ID not configured. Please add GOOGLE_SHEET_ID to your .env file" })
    );
    assert_eq!(sheet.calls(), 0, "reader must not be called without a sheet id");
}

#[test]
fn not_found_upstream_maps_to_fetch_error_with_hint() {
    let sheet = FakeSheet::failing(SheetsError::RemoteFetch {
        status: 404,
        message: "Requested entity was not found.".into(),
    });
    let state = state_with(configured(), sheet);

    let resp = respond(get("/api/properties"), &state);
    assert_eq!(resp.status(), 500);

    let body = body_json(resp);
    assert_eq!(body["error"], "Failed to fetch properties");
    assert_eq!(body["errorType"], "RemoteFetchError");
    assert!(body["details"].as_str().unwrap().contains("Requested entity was not found."));
    assert!(body["hint"].as_str().unwrap().contains("not shared with the service account"));
}

#[test]
fn forbidden_upstream_gets_sharing_hint() {
    let sheet = FakeSheet::failing(SheetsError::RemoteFetch {
        status: 403,
        message: "The caller does not have permission".into(),
    });
    let state = state_with(configured(), sheet);

    let body = body_json(respond(get("/api/properties"), &state));
    assert_eq!(body["hint"], "Make sure the sheet is shared with the service account email");
}

#[test]
fn auth_configuration_failure_does_not_leak_key() {
    let sheet = FakeSheet::failing(SheetsError::AuthConfiguration(
        "Google Sheets credentials not configured in environment variables".into(),
    ));
    let state = state_with(configured(), sheet);

    let resp = respond(get("/api/properties"), &state);
    assert_eq!(resp.status(), 500);

    let text = crate::tests::utils::body_string(resp);
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(body["errorType"], "AuthConfigurationError");
    assert!(!text.contains("secret"));
}

#[test]
fn unknown_route_is_json_404() {
    let state = state_with(configured(), FakeSheet::with_rows(&[]));

    let resp = respond(get("/nope"), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp), json!({ "error": "Not Found" }));
}

#[test]
fn non_get_methods_are_not_routed() {
    let state = state_with(configured(), FakeSheet::with_rows(SAMPLE_ROWS));

    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/api/properties")
        .body(astra::Body::empty())
        .unwrap();

    let resp = respond(req, &state);
    assert_eq!(resp.status(), 404);
}
