//! Resolve Session Use Case
//!
//! Turns the token presented by the browser into the signed-in user's email.
//! Every failure means "not signed in"; the outcome still tells a rejected
//! token apart from a provider that could not answer.

use std::sync::Arc;

use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::AccessToken;
use crate::error::{AuthError, AuthResult};

/// Outcome of resolving a presented token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// The provider accepted the token and knows the user's email
    SignedIn(String),
    /// No token was presented
    Anonymous,
    /// The provider refused the token, or its user has no email
    Rejected,
    /// The provider could not give a verdict (unreachable, 5xx, bad body)
    Unavailable,
}

/// Resolve session use case
pub struct ResolveSessionUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> ResolveSessionUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Resolve `token` into a session; failures are logged, never returned
    pub async fn execute(&self, token: Option<&AccessToken>) -> Session {
        match self.lookup(token).await {
            Ok(email) => Session::SignedIn(email),
            Err(AuthError::MissingToken) => Session::Anonymous,
            Err(e) if e.invalidates_token() => {
                tracing::warn!(error = %e, "Error getting user from token");
                Session::Rejected
            }
            Err(e) => {
                tracing::warn!(error = %e, "Identity provider gave no verdict on token");
                Session::Unavailable
            }
        }
    }

    async fn lookup(&self, token: Option<&AccessToken>) -> AuthResult<String> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let user = self.provider.get_user(token).await?;
        let email = user
            .display_email()
            .ok_or(AuthError::MissingEmail)?
            .to_string();

        tracing::debug!(user_id = %user.id, "Session resolved");
        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{FakeProvider, Mode};

    fn use_case(provider: FakeProvider) -> ResolveSessionUseCase<FakeProvider> {
        ResolveSessionUseCase::new(Arc::new(provider))
    }

    #[tokio::test]
    async fn test_outcomes() {
        let provider = FakeProvider::new()
            .with_user("good", Some("someone@example.com"))
            .with_user("no-email", None);
        let use_case = use_case(provider);

        let good = AccessToken::parse("good").unwrap();
        let no_email = AccessToken::parse("no-email").unwrap();
        let forged = AccessToken::parse("forged").unwrap();

        assert_eq!(
            use_case.execute(Some(&good)).await,
            Session::SignedIn("someone@example.com".to_string())
        );
        assert_eq!(use_case.execute(None).await, Session::Anonymous);
        assert_eq!(use_case.execute(Some(&no_email)).await, Session::Rejected);
        assert_eq!(use_case.execute(Some(&forged)).await, Session::Rejected);
    }

    #[tokio::test]
    async fn test_outage_is_not_a_rejection() {
        let provider = FakeProvider::new()
            .with_user("good", Some("someone@example.com"))
            .with_mode(Mode::Unreachable);
        let token = AccessToken::parse("good").unwrap();

        assert_eq!(
            use_case(provider).execute(Some(&token)).await,
            Session::Unavailable
        );
    }
}
