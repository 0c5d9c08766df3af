use crate::router::{handle, respond};
use crate::sheets::SheetsError;
use crate::tests::utils::{body_json, body_string, configured, get, state_with, FakeSheet, SAMPLE_ROWS};

#[test]
fn brochure_renders_for_available_property() {
    let state = state_with(configured(), FakeSheet::with_rows(SAMPLE_ROWS));

    let resp = handle(get("/properties/MAD-1/brochure"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "inline; filename=\"MAD-1_brochure.html\""
    );

    let html = body_string(resp);
    assert!(html.contains("<h1>Madrid</h1>"));
    assert!(html.contains("Código: MAD-1"));
    assert!(html.contains("Habitaciones: 2"));
    assert!(html.contains("Baños: N/A"));
    assert!(html.contains("(Imagen no disponible)"));
}

#[test]
fn brochure_code_is_percent_decoded() {
    let rows: &[&[&str]] = &[&["CODE", "AVAILABLE", "Location"], &["MAD 7", "yes", "Chamberí"]];
    let state = state_with(configured(), FakeSheet::with_rows(rows));

    let resp = handle(get("/properties/MAD%207/brochure"), &state).expect("Handler failed");
    assert!(body_string(resp).contains("Chamberí"));
}

#[test]
fn unavailable_property_has_no_brochure() {
    let state = state_with(configured(), FakeSheet::with_rows(SAMPLE_ROWS));

    let resp = respond(get("/properties/MIL-2/brochure"), &state);
    assert_eq!(resp.status(), 404);

    let body = body_json(resp);
    assert_eq!(body["error"], "Property not found");
    assert_eq!(body["details"], "No available property with code MIL-2");
}

#[test]
fn brochure_surfaces_fetch_failures() {
    let sheet = FakeSheet::failing(SheetsError::Unexpected("connection reset".into()));
    let state = state_with(configured(), sheet);

    let resp = respond(get("/properties/MAD-1/brochure"), &state);
    assert_eq!(resp.status(), 500);
    assert_eq!(body_json(resp)["errorType"], "UnexpectedError");
}

#[test]
fn brochure_filename_is_sanitized_for_the_header() {
    let rows: &[&[&str]] = &[
        &["CODE", "AVAILABLE", "Location"],
        &["MAD\"1", "yes", "Madrid"],
        &["MAD\n2", "yes", "Getafe"],
    ];
    let state = state_with(configured(), FakeSheet::with_rows(rows));

    let quoted = handle(get("/properties/MAD%221/brochure"), &state).expect("Handler failed");
    assert_eq!(quoted.status(), 200);
    assert_eq!(
        quoted.headers().get("Content-Disposition").unwrap(),
        "inline; filename=\"MAD_1_brochure.html\""
    );

    let newline = respond(get("/properties/MAD%0A2/brochure"), &state);
    assert_eq!(newline.status(), 200);
    assert_eq!(
        newline.headers().get("Content-Disposition").unwrap(),
        "inline; filename=\"MAD_2_brochure.html\""
    );
    assert!(body_string(newline).contains("Getafe"));
}
