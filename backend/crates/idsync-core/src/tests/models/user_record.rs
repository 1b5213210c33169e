use crate::{CoreError, EmailAddress, UserIdentityEvent, UserRecord};

use googletest::assert_that;
use googletest::prelude::eq;

fn ann_lee() -> UserIdentityEvent {
    UserIdentityEvent {
        id: Some("u1".into()),
        first_name: Some("Ann".into()),
        last_name: Some("Lee".into()),
        email_addresses: vec![EmailAddress::new("a@x.com")],
        image_url: Some("http://img".into()),
    }
}

#[test]
fn given_complete_event_when_built_then_record_matches_event() {
    let record = UserRecord::from_event(&ann_lee()).unwrap();

    assert_eq!(
        record,
        UserRecord {
            id: "u1".into(),
            email: "a@x.com".into(),
            name: "Ann Lee".into(),
            image_url: Some("http://img".into()),
        }
    );
}

#[test]
fn given_several_emails_when_built_then_first_one_wins() {
    let mut event = ann_lee();
    event.email_addresses.push(EmailAddress::new("b@x.com"));

    let record = UserRecord::from_event(&event).unwrap();

    assert_that!(record.email.as_str(), eq("a@x.com"));
}

#[test]
fn given_no_image_when_built_then_image_url_is_none() {
    let mut event = ann_lee();
    event.image_url = None;

    let record = UserRecord::from_event(&event).unwrap();

    assert_that!(record.image_url.is_none(), eq(true));
}

#[test]
fn given_no_name_fragments_when_built_then_name_is_empty_string() {
    let mut event = ann_lee();
    event.first_name = None;
    event.last_name = None;

    let record = UserRecord::from_event(&event).unwrap();

    assert_that!(record.name.as_str(), eq(""));
}

#[test]
fn given_missing_id_when_built_then_validation_error_on_id() {
    let mut event = ann_lee();
    event.id = None;

    let result = UserRecord::from_event(&event);

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "id", .. })
    ));
}

#[test]
fn given_no_emails_when_built_then_validation_error_on_email() {
    let mut event = ann_lee();
    event.email_addresses.clear();

    let result = UserRecord::from_event(&event);

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "email_addresses",
            ..
        })
    ));
}

#[test]
fn given_empty_first_email_when_built_then_validation_error() {
    let mut event = ann_lee();
    event.email_addresses = vec![EmailAddress::new("")];

    assert_that!(UserRecord::from_event(&event).is_err(), eq(true));
}

#[test]
fn given_only_second_email_usable_when_built_then_still_invalid() {
    let mut event = ann_lee();
    event.email_addresses = vec![EmailAddress::default(), EmailAddress::new("b@x.com")];

    assert_that!(UserRecord::from_event(&event).is_err(), eq(true));
}
