//! Tests for the error payload constructors and serde contract.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn room_and_name_failures() -> ValidationErrors {
    let mut failures = ValidationErrors::default();
    failures.add("roomId", "Room ID is required");
    failures.add("guestName", "Guest name is required");
    failures
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("fixture is a valid UUID");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn validation_uses_fixed_message_and_keeps_every_field(room_and_name_failures: ValidationErrors) {
    let error = Error::validation(room_and_name_failures);

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), VALIDATION_FAILED_MESSAGE);
    let errors = error.errors().expect("validation errors present");
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.get("roomId").map(Vec::as_slice),
        Some(["Room ID is required".to_owned()].as_slice())
    );
}

#[rstest]
fn serialises_with_camel_case_and_skips_absent_fields() {
    let error = Error::not_found("Booking with ID x not found").with_trace_id(TRACE_ID);
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "not_found",
            "message": "Booking with ID x not found",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
fn validation_errors_serialise_as_field_map(room_and_name_failures: ValidationErrors) {
    let value = serde_json::to_value(Error::validation(room_and_name_failures))
        .expect("serialise error");
    assert_eq!(
        value.get("errors"),
        Some(&json!({
            "guestName": ["Guest name is required"],
            "roomId": ["Room ID is required"],
        }))
    );
}

#[rstest]
fn deserialises_payload_written_by_adapters() {
    let error: Error = serde_json::from_value(json!({
        "code": "invalid_request",
        "message": "Validation failed",
        "errors": { "pageSize": ["Page size must not exceed 100"] }
    }))
    .expect("deserialise error");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert!(error.trace_id().is_none());
    assert!(error.errors().is_some_and(|map| map.contains_key("pageSize")));
}

#[rstest]
fn display_shows_message() {
    assert_eq!(Error::internal("boom").to_string(), "boom");
}
