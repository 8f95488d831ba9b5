//! Domain Layer
//!
//! Contains entities, value objects, and the identity provider port.

pub mod entity;
pub mod provider;
pub mod value_object;

// Re-exports
pub use entity::ProviderUser;
pub use provider::IdentityProvider;
pub use value_object::{AccessToken, OAuthProvider};
