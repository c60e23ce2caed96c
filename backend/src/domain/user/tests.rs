//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn valid_id() -> &'static str {
    "alice"
}

#[fixture]
fn valid_display_name() -> &'static str {
    "Alice Martin"
}

#[rstest]
fn try_new_accepts_valid_inputs(valid_id: &str, valid_display_name: &str) {
    let user = User::try_from_strings(valid_id, valid_display_name).expect("valid user");
    assert_eq!(user.id().as_ref(), valid_id);
    assert_eq!(user.display_name().as_ref(), valid_display_name);
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("ali ce", UserValidationError::InvalidId)]
#[case(" alice", UserValidationError::InvalidId)]
fn user_id_rejects_malformed_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
fn accepts_minimum_length(valid_id: &str) {
    let name = "a".repeat(DISPLAY_NAME_MIN);
    assert!(User::try_from_strings(valid_id, name).is_ok());
}

#[rstest]
fn accepts_maximum_length(valid_id: &str) {
    let name = "a".repeat(DISPLAY_NAME_MAX);
    assert!(User::try_from_strings(valid_id, name).is_ok());
}

#[rstest]
#[case("   ", UserValidationError::EmptyDisplayName)]
#[case("ab", UserValidationError::DisplayNameTooShort { min: DISPLAY_NAME_MIN })]
#[case(
    "a_very_long_display_name_over_the_limit",
    UserValidationError::DisplayNameTooLong { max: DISPLAY_NAME_MAX }
)]
#[case("alice!", UserValidationError::DisplayNameInvalidCharacters)]
fn display_name_rejects_invalid_values(
    valid_id: &str,
    #[case] raw: &str,
    #[case] expected: UserValidationError,
) {
    assert_eq!(User::try_from_strings(valid_id, raw), Err(expected));
}

#[rstest]
#[should_panic(expected = "user string values must satisfy validation")]
fn from_strings_panics_when_invalid() {
    let _ = User::from_strings("", "Alice Martin");
}

#[rstest]
fn serde_accepts_snake_case_alias(valid_id: &str, valid_display_name: &str) {
    let payload = json!({ "id": valid_id, "display_name": valid_display_name });
    let user: User = serde_json::from_value(payload).expect("deserialise user");

    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value.get("displayName").and_then(|v| v.as_str()),
        Some(valid_display_name)
    );
}

#[rstest]
fn serde_rejects_invalid_id(valid_display_name: &str) {
    let payload = json!({ "id": "", "displayName": valid_display_name });
    assert!(serde_json::from_value::<User>(payload).is_err());
}
