use crate::{EmailAddress, EventEnvelope, UserIdentityEvent};

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

#[test]
fn given_provider_json_when_deserialized_then_fields_mapped() {
    let event: UserIdentityEvent = serde_json::from_value(json!({
        "id": "u1",
        "first_name": "Ann",
        "last_name": "Lee",
        "email_addresses": [{ "email_address": "a@x.com", "id": "idn_1" }],
        "image_url": "http://img",
        "username": null
    }))
    .unwrap();

    assert_that!(event.user_id(), eq(Some("u1")));
    assert_that!(event.primary_email(), eq(Some("a@x.com")));
    assert_that!(event.display_name().as_str(), eq("Ann Lee"));
    assert_that!(event.image_url.as_deref(), eq(Some("http://img")));
}

#[test]
fn given_empty_object_when_deserialized_then_everything_absent() {
    let event: UserIdentityEvent = serde_json::from_value(json!({})).unwrap();

    assert_that!(event.user_id(), eq(None));
    assert_that!(event.primary_email(), eq(None));
    assert_that!(event.email_addresses.len(), eq(0));
}

#[test]
fn given_null_email_list_when_deserialized_then_treated_as_empty() {
    let event: UserIdentityEvent =
        serde_json::from_value(json!({ "id": "u1", "email_addresses": null })).unwrap();

    assert_that!(event.email_addresses.len(), eq(0));
    assert_that!(event.primary_email(), eq(None));
}

#[test]
fn given_empty_id_when_resolved_then_none() {
    let event = UserIdentityEvent {
        id: Some(String::new()),
        ..Default::default()
    };

    assert_that!(event.user_id(), eq(None));
}

#[test]
fn given_unusable_first_email_when_resolved_then_later_entries_ignored() {
    let event = UserIdentityEvent {
        id: Some("u1".into()),
        email_addresses: vec![EmailAddress::default(), EmailAddress::new("b@x.com")],
        ..Default::default()
    };

    assert_that!(event.primary_email(), eq(None));
}

#[test]
fn given_event_when_logged_then_payload_is_json() {
    let event = UserIdentityEvent {
        id: Some("u1".into()),
        ..Default::default()
    };

    let logged: serde_json::Value = serde_json::from_str(&event.to_log_string()).unwrap();

    assert_that!(logged["id"].as_str(), eq(Some("u1")));
}

#[test]
fn given_envelope_json_when_deserialized_then_routing_fields_read() {
    let envelope: EventEnvelope = serde_json::from_value(json!({
        "name": "identity.user.created",
        "id": "01HX",
        "ts": 1700000000000i64,
        "v": "2024-01-01",
        "data": { "id": "u1" }
    }))
    .unwrap();

    assert_that!(envelope.name.as_str(), eq("identity.user.created"));
    assert_that!(envelope.id.as_deref(), eq(Some("01HX")));
    assert_that!(envelope.ts, eq(Some(1700000000000i64)));
    assert_that!(envelope.data.user_id(), eq(Some("u1")));
}

#[test]
fn given_envelope_without_data_when_deserialized_then_empty_payload() {
    let envelope: EventEnvelope =
        serde_json::from_value(json!({ "name": "identity.user.deleted" })).unwrap();

    assert_eq!(envelope.data, UserIdentityEvent::default());
}

#[test]
fn given_null_email_entry_when_deserialized_then_entry_has_no_address() {
    let event: UserIdentityEvent = serde_json::from_value(json!({
        "id": "u1",
        "email_addresses": [null, { "email_address": "b@x.com" }]
    }))
    .unwrap();

    assert_that!(event.email_addresses.len(), eq(2));
    assert_eq!(event.email_addresses[0], EmailAddress::default());
    assert_that!(event.primary_email(), eq(None));
}

#[test]
fn given_envelope_with_null_data_when_deserialized_then_empty_payload() {
    let envelope: EventEnvelope =
        serde_json::from_value(json!({ "name": "identity.user.deleted", "data": null })).unwrap();

    assert_eq!(envelope.data, UserIdentityEvent::default());
    assert_that!(envelope.data.user_id(), eq(None));
}
