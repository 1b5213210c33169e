#![allow(dead_code)]

use idsync_core::UserRecord;

/// Creates a test UserRecord with sensible defaults
pub fn create_test_user(id: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        name: "Ann Lee".to_string(),
        image_url: Some("http://img/ann.png".to_string()),
    }
}
