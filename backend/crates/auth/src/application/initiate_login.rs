//! Initiate Login Use Case
//!
//! Asks the identity provider where to send the browser to sign in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::provider::IdentityProvider;
use crate::error::{AuthError, AuthResult};

/// Initiate login use case
pub struct InitiateLoginUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<P> InitiateLoginUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self { provider, config }
    }

    /// OAuth URL for the configured provider, returning to `redirect_to`
    pub async fn execute(&self, redirect_to: &str) -> AuthResult<String> {
        let provider = self.config.oauth_provider;
        let url = self.provider.authorize_url(provider, redirect_to).await?;

        if url.trim().is_empty() {
            return Err(AuthError::MissingOAuthUrl);
        }

        tracing::info!(provider = %provider, redirect_to = %redirect_to, "OAuth flow initiated");
        Ok(url)
    }
}
