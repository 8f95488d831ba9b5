//! Access Token Value Object
//!
//! Opaque credential issued by the identity provider. We never look inside it;
//! the provider is the only party that can tell whether it is valid.

use std::fmt;

/// Provider-issued access token
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token, `None` for a missing or blank value
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens end up in logs via `?` formatting; never print them.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(<redacted, {} bytes>)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_rejects_blank() {
        assert_eq!(AccessToken::parse("  abc.def  ").unwrap().as_str(), "abc.def");
        assert!(AccessToken::parse("").is_none());
        assert!(AccessToken::parse("   ").is_none());
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = AccessToken::parse("secret-jwt").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret-jwt"));
        assert!(debug.contains("10 bytes"));
    }
}
