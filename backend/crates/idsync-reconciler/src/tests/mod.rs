
use idsync_core::{EmailAddress, EventEnvelope, UserEventKind, UserIdentityEvent};

/// A provider user with every field populated
pub(crate) fn ann_lee() -> UserIdentityEvent {
    UserIdentityEvent {
        id: Some("u1".into()),
        first_name: Some("Ann".into()),
        last_name: Some("Lee".into()),
        email_addresses: vec![EmailAddress::new("a@x.com")],
        image_url: Some("http://img".into()),
    }
}

pub(crate) fn envelope(kind: UserEventKind, data: UserIdentityEvent) -> EventEnvelope {
    EventEnvelope::new(kind.as_str(), data)
}
