//! Value Object Module

pub mod access_token;
pub mod oauth_provider;

pub use access_token::AccessToken;
pub use oauth_provider::OAuthProvider;
