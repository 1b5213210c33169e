use crate::{FunctionDto, list_functions};

use idsync_reconciler::SYNC_USER_DELETION;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_definition_when_converted_then_event_uses_wire_name() {
    let dto = FunctionDto::from(&SYNC_USER_DELETION);

    assert_that!(dto.id.as_str(), eq("delete-user-from-clerk"));
    assert_that!(dto.event.as_str(), eq("identity.user.deleted"));
}

#[tokio::test]
async fn given_registry_when_listed_then_all_functions_returned_in_order() {
    let response = list_functions().await;
    let ids: Vec<&str> = response.functions.iter().map(|f| f.id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "sync-user-from-clerk",
            "update-user-from-clerk",
            "delete-user-from-clerk"
        ]
    );
}
