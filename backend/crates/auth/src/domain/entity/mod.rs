//! Entity Module

pub mod provider_user;

pub use provider_user::ProviderUser;
