//! Provider User Entity
//!
//! The identity the auth service returns for a valid access token.
//! Only the fields this service reads are modelled; the rest is ignored.

use serde::Deserialize;

/// User as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderUser {
    /// Provider-side user ID (UUID string)
    pub id: String,
    /// Primary email; absent for phone-only accounts
    #[serde(default)]
    pub email: Option<String>,
}

impl ProviderUser {
    /// Email to display, ignoring empty strings
    pub fn display_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }
}
