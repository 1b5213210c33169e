//! Payload of an identity-provider user lifecycle event.
//!
//! Field names follow the provider's snake_case JSON. Every field is
//! optional on the wire: validation happens in the handlers, not during
//! deserialization, so a malformed event still reaches a handler and gets
//! logged instead of being rejected by the transport.

use crate::{EmailAddress, normalize_name};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserIdentityEvent {
    /// Provider user id, doubles as the store primary key
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Only the first entry is authoritative
    #[serde(default, deserialize_with = "null_tolerant_emails")]
    pub email_addresses: Vec<EmailAddress>,
    pub image_url: Option<String>,
}

impl UserIdentityEvent {
    /// The provider id, if present and non-empty.
    pub fn user_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Address of the first email entry, if present and non-empty.
    ///
    /// Later entries are never consulted, even when the first is unusable.
    pub fn primary_email(&self) -> Option<&str> {
        self.email_addresses
            .first()
            .and_then(|entry| entry.email_address.as_deref())
            .filter(|address| !address.is_empty())
    }

    pub fn display_name(&self) -> String {
        normalize_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    /// Raw payload for log lines. Falls back to the debug form if the
    /// payload cannot be serialized.
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

/// `null` where an object or list is expected reads as its default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A `null` list reads as empty, a `null` entry as an entry without an address.
fn null_tolerant_emails<'de, D>(deserializer: D) -> Result<Vec<EmailAddress>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries: Vec<Option<EmailAddress>> = null_as_default(deserializer)?;
    Ok(entries.into_iter().map(Option::unwrap_or_default).collect())
}
