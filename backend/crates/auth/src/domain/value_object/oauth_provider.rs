//! OAuth Provider Value Object
//!
//! Upstream identity providers the hosted auth service can federate to.

use derive_more::Display;

/// External OAuth identity provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum OAuthProvider {
    #[default]
    #[display("google")]
    Google,
}

impl OAuthProvider {
    /// Provider code as the auth service expects it in `provider=`
    pub const fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
        }
    }

    /// Human-readable name for buttons and messages
    pub const fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_code() {
        assert_eq!(OAuthProvider::Google.as_str(), "google");
        assert_eq!(OAuthProvider::Google.to_string(), "google");
        assert_eq!(OAuthProvider::Google.label(), "Google");
        assert_eq!(OAuthProvider::default(), OAuthProvider::Google);
    }
}
