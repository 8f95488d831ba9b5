//! Sign Out Use Case
//!
//! Invalidates the presented token at the identity provider.

use std::sync::Arc;

use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::AccessToken;

/// Sign out use case
pub struct SignOutUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> SignOutUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Sign out from the provider session behind `token`
    ///
    /// Failures are logged only: the browser is sent home either way.
    pub async fn execute(&self, token: Option<&AccessToken>) {
        let Some(token) = token else {
            tracing::debug!("Sign out without token, nothing to revoke");
            return;
        };

        match self.provider.sign_out(token).await {
            Ok(()) => tracing::info!("User signed out"),
            Err(e) => tracing::warn!(error = %e, "Sign out at identity provider failed"),
        }
    }
}
