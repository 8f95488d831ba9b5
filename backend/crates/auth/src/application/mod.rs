//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod initiate_login;
pub mod resolve_session;
pub mod sign_out;

// Re-exports
pub use config::AuthConfig;
pub use initiate_login::InitiateLoginUseCase;
pub use resolve_session::{ResolveSessionUseCase, Session};
pub use sign_out::SignOutUseCase;
