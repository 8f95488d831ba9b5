//! Auth Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::provider::IdentityProvider;
use crate::infra::supabase::SupabaseClient;
use crate::presentation::handlers::{self, AuthAppState};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";
pub const HEALTH_PATH: &str = "/health";

/// Create the Auth router backed by Supabase
pub fn auth_router(provider: SupabaseClient, config: AuthConfig) -> Router {
    auth_router_generic(provider, config)
}

/// Create a generic Auth router for any identity provider implementation
pub fn auth_router_generic<P>(provider: P, config: AuthConfig) -> Router
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        provider: Arc::new(provider),
        config: Arc::new(config),
    };

    Router::new()
        .route(ROOT_PATH, get(handlers::index::<P>))
        .route(LOGIN_PATH, get(handlers::login::<P>))
        .route(
            LOGOUT_PATH,
            get(handlers::logout::<P>).post(handlers::logout::<P>),
        )
        .route(HEALTH_PATH, get(handlers::health))
        .fallback(handlers::not_found)
        .with_state(state)
}
