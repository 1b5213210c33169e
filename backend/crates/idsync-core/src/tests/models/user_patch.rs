use crate::{CoreError, EmailAddress, FieldUpdate, UserIdentityEvent, UserPatch};

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_first_name_only_when_built_then_email_unchanged_and_image_nulled() {
    // Given
    let event = UserIdentityEvent {
        id: Some("u1".into()),
        first_name: Some("Ann".into()),
        ..Default::default()
    };

    // When
    let (id, patch) = UserPatch::from_event(&event).unwrap();

    // Then
    assert_that!(id.as_str(), eq("u1"));
    assert_eq!(
        patch,
        UserPatch {
            email: FieldUpdate::Unchanged,
            name: FieldUpdate::Set("Ann".into()),
            image_url: FieldUpdate::Set(None),
        }
    );
}

#[test]
fn given_email_when_built_then_email_set() {
    let event = UserIdentityEvent {
        id: Some("u1".into()),
        email_addresses: vec![EmailAddress::new("new@x.com")],
        image_url: Some("http://img".into()),
        ..Default::default()
    };

    let (_, patch) = UserPatch::from_event(&event).unwrap();

    assert_eq!(patch.email, FieldUpdate::Set("new@x.com".to_string()));
    assert_eq!(
        patch.image_url,
        FieldUpdate::Set(Some("http://img".to_string()))
    );
}

#[test]
fn given_no_name_fragments_when_built_then_name_reset_to_empty() {
    let event = UserIdentityEvent {
        id: Some("u1".into()),
        ..Default::default()
    };

    let (_, patch) = UserPatch::from_event(&event).unwrap();

    assert_eq!(patch.name, FieldUpdate::Set(String::new()));
}

#[test]
fn given_empty_first_email_when_built_then_email_unchanged() {
    let event = UserIdentityEvent {
        id: Some("u1".into()),
        email_addresses: vec![EmailAddress::new("")],
        ..Default::default()
    };

    let (_, patch) = UserPatch::from_event(&event).unwrap();

    assert_that!(patch.email.is_set(), eq(false));
}

#[test]
fn given_missing_id_when_built_then_validation_error() {
    let event = UserIdentityEvent {
        first_name: Some("Ann".into()),
        ..Default::default()
    };

    let result = UserPatch::from_event(&event);

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "id", .. })
    ));
}

#[test]
fn given_default_patch_when_checked_then_empty() {
    assert_that!(UserPatch::default().is_empty(), eq(true));
}

#[test]
fn given_patch_when_serialized_then_unchanged_and_null_are_distinct() {
    let patch = UserPatch {
        email: FieldUpdate::Unchanged,
        name: FieldUpdate::Set("Ann".into()),
        image_url: FieldUpdate::Set(None),
    };

    let json = serde_json::to_value(&patch).unwrap();

    assert_that!(json["email"]["op"].as_str(), eq(Some("unchanged")));
    assert_that!(json["image_url"]["op"].as_str(), eq(Some("set")));
    assert_that!(json["image_url"]["value"].is_null(), eq(true));
}
