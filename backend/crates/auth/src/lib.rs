//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, identity provider port
//! - `application/` - Use cases and configuration
//! - `infra/` - Supabase Auth client
//! - `presentation/` - HTTP handlers, views, DTOs, router
//!
//! ## Features
//! - Google sign-in delegated to a hosted auth service (Supabase)
//! - Welcome page for a valid access token, login page otherwise
//! - Logout revokes the token at the provider and clears the cookie
//!
//! ## Security Model
//! - No local token validation: the provider is asked on every request
//! - Tokens are only forwarded; the cookie copy is HTTP-only and re-checked
//! - Any lookup failure collapses to "not signed in"

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::provider::IdentityProvider;
pub use error::{AuthError, AuthResult};
pub use infra::supabase::SupabaseClient;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
