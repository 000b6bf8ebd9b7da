//! User Session
//!
//! Display-only session marker. Nothing here is a credential: a "login" is
//! synthesized locally from an email address.

use serde::{Deserialize, Serialize};

use super::entity::{new_id, required, DomainResult};

/// Id shared by every guest session
pub const GUEST_USER_ID: &str = "guest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub is_guest: bool,
}

impl User {
    /// Simulated magic-link login; no mail is sent.
    pub fn magic_link(email: &str) -> DomainResult<Self> {
        let email = required("email", email)?;
        Ok(Self {
            id: new_id(),
            email: Some(email),
            is_guest: false,
        })
    }

    pub fn guest() -> Self {
        Self {
            id: GUEST_USER_ID.to_string(),
            email: None,
            is_guest: true,
        }
    }

    /// Label for the account button
    pub fn display_name(&self) -> &str {
        if self.is_guest {
            return "Guest";
        }
        self.email.as_deref().unwrap_or(&self.id)
    }
}
