use crate::{CoreError, UserEventKind};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

#[test]
fn given_known_names_when_parsed_then_round_trip_through_as_str() {
    for kind in UserEventKind::ALL {
        let result = UserEventKind::from_str(kind.as_str());
        assert_that!(result, ok(anything()));
        assert_that!(result.unwrap(), eq(kind));
    }
}

#[test]
fn given_unknown_name_when_parsed_then_unknown_event_type_error() {
    let result = UserEventKind::from_str("identity.session.created");

    assert!(matches!(result, Err(CoreError::UnknownEventType { .. })));
}

#[test]
fn given_kind_when_serialized_then_uses_event_type_name() {
    let json = serde_json::to_string(&UserEventKind::Deleted).unwrap();

    assert_that!(json.as_str(), eq("\"identity.user.deleted\""));
}

#[test]
fn given_kind_when_displayed_then_matches_as_str() {
    assert_that!(
        UserEventKind::Updated.to_string().as_str(),
        eq("identity.user.updated")
    );
}
