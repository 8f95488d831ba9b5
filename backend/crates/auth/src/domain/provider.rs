//! Identity Provider Port
//!
//! Interface to the hosted authentication service. The implementation lives
//! in the infrastructure layer.

use crate::domain::entity::ProviderUser;
use crate::domain::value_object::{AccessToken, OAuthProvider};
use crate::error::AuthResult;

/// Hosted identity provider (OAuth initiation, user lookup, sign-out)
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// URL the browser must visit to start the OAuth flow with `provider`,
    /// returning to `redirect_to` afterwards
    async fn authorize_url(&self, provider: OAuthProvider, redirect_to: &str)
    -> AuthResult<String>;

    /// Look up the user owning `token`
    async fn get_user(&self, token: &AccessToken) -> AuthResult<ProviderUser>;

    /// Invalidate `token` on the provider side
    async fn sign_out(&self, token: &AccessToken) -> AuthResult<()>;
}
