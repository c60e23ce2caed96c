//! Tests for the domain error payload and its serde contract.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn reduce_seats_error() -> Error {
    Error::invalid_request("seats cannot be reduced")
        .with_details(json!({
            "currentSeats": 100,
            "requestedSeats": 50,
        }))
        .with_reason_code("webinar_reduce_seats")
}

#[rstest]
fn invalid_request_constructor_sets_code() {
    let err = Error::invalid_request("bad");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[case(Error::forbidden("nope"), ErrorCode::Forbidden)]
#[case(Error::not_found("gone"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn convenience_constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
#[should_panic(expected = "error messages must satisfy validation")]
fn new_panics_on_empty_message() {
    let _ = Error::new(ErrorCode::NotFound, "");
}

#[rstest]
fn display_uses_message(reduce_seats_error: Error) {
    assert_eq!(reduce_seats_error.to_string(), "seats cannot be reduced");
}

#[rstest]
fn serialises_to_camel_case_with_details(reduce_seats_error: Error) {
    let value = serde_json::to_value(&reduce_seats_error).expect("serialise error");

    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["message"], "seats cannot be reduced");
    assert_eq!(value["details"]["code"], "webinar_reduce_seats");
}

#[rstest]
fn omits_details_when_absent() {
    let value = serde_json::to_value(Error::not_found("missing")).expect("serialise error");
    assert!(value.get("details").is_none());
}

#[rstest]
fn deserialising_rejects_blank_message() {
    let payload = json!({ "code": "not_found", "message": "  " });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}

#[rstest]
fn deserialising_restores_details(reduce_seats_error: Error) {
    let payload = serde_json::to_value(&reduce_seats_error).expect("serialise error");
    let restored: Error = serde_json::from_value(payload).expect("deserialise error");
    assert_eq!(restored, reduce_seats_error);
}

#[rstest]
fn reason_code_merges_into_object_details(reduce_seats_error: Error) {
    let details = reduce_seats_error.details().expect("details present");

    assert_eq!(reduce_seats_error.reason_code(), Some("webinar_reduce_seats"));
    assert_eq!(details["currentSeats"], 100);
    assert_eq!(details["requestedSeats"], 50);
}

#[rstest]
#[case(None, json!({ "code": "webinar_not_found" }))]
#[case(Some(json!("raw")), json!({ "code": "webinar_not_found", "detail": "raw" }))]
fn reason_code_builds_an_object(#[case] details: Option<Value>, #[case] expected: Value) {
    let base = Error::not_found("missing");
    let base = match details {
        Some(value) => base.with_details(value),
        None => base,
    };

    let err = base.with_reason_code("webinar_not_found");
    assert_eq!(err.details(), Some(&expected));
}

#[rstest]
fn reason_code_is_absent_without_details() {
    assert_eq!(Error::internal("boom").reason_code(), None);
}
