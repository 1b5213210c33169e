use serde::{Deserialize, Serialize};

/// One entry of the identity provider's `email_addresses` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailAddress {
    pub email_address: Option<String>,
}

impl EmailAddress {
    pub fn new<S: Into<String>>(address: S) -> Self {
        Self {
            email_address: Some(address.into()),
        }
    }
}
