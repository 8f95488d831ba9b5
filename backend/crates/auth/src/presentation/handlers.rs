//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use kernel::error::app_error::AppError;
use platform::client::extract_origin;
use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::{InitiateLoginUseCase, ResolveSessionUseCase, Session, SignOutUseCase};
use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::AccessToken;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{HealthResponse, TokenQuery};
use crate::presentation::router::ROOT_PATH;
use crate::presentation::views;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub config: Arc<AuthConfig>,
}

/// Where the token of this request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenSource {
    Query,
    Cookie,
}

/// Token from `?access_token=`, falling back to the token cookie
fn presented_token(
    query: &Result<Query<TokenQuery>, QueryRejection>,
    headers: &HeaderMap,
    config: &AuthConfig,
) -> Option<(AccessToken, TokenSource)> {
    let from_query = query
        .as_ref()
        .ok()
        .and_then(|Query(q)| q.access_token.as_deref())
        .and_then(AccessToken::parse)
        .map(|token| (token, TokenSource::Query));

    from_query.or_else(|| {
        extract_cookie(headers, &config.token_cookie_name)
            .as_deref()
            .and_then(AccessToken::parse)
            .map(|token| (token, TokenSource::Cookie))
    })
}

// ============================================================================
// Index
// ============================================================================

/// GET /
///
/// Welcome page for a token the provider accepts, login page otherwise.
pub async fn index<P>(
    State(state): State<AuthAppState<P>>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let presented = presented_token(&query, &headers, &state.config);
    let token = presented.as_ref().map(|(token, _)| token);

    let use_case = ResolveSessionUseCase::new(state.provider.clone());
    let provider = state.config.oauth_provider;
    let cookie = state.config.token_cookie();

    let session = use_case.execute(token).await;

    let mut response = match &session {
        Session::SignedIn(email) => Html(views::render_welcome(email, provider)?).into_response(),
        _ => Html(views::render_login(provider)?).into_response(),
    };

    let set_cookie = match (&session, &presented) {
        // Remember a freshly delivered token so reloads of "/" stay signed in
        (Session::SignedIn(_), Some((token, TokenSource::Query))) => {
            cookie.set_cookie_header(token.as_str())
        }
        // Only a provider verdict ends the cookie; an outage keeps it for the next try
        (Session::Rejected, Some((_, TokenSource::Cookie))) => cookie.delete_cookie_header(),
        _ => None,
    };
    if let Some(value) = set_cookie {
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
///
/// Redirects to the provider's OAuth page; the provider sends the browser
/// back to this request's origin afterwards.
pub async fn login<P>(
    State(state): State<AuthAppState<P>>,
    headers: HeaderMap,
) -> AuthResult<Redirect>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let redirect_to = extract_origin(
        &headers,
        state.config.public_url.as_deref(),
        state.config.trust_proxy,
    )
        .map_err(|e| AuthError::oauth_initiation(e.into()))?;

    let use_case = InitiateLoginUseCase::new(state.provider.clone(), state.config.clone());
    let url = use_case
        .execute(&redirect_to)
        .await
        .map_err(AuthError::oauth_initiation)?;

    Ok(Redirect::to(&url))
}

// ============================================================================
// Logout
// ============================================================================

/// GET|POST /logout
///
/// Always ends on `/` without a token, whatever the provider says.
pub async fn logout<P>(
    State(state): State<AuthAppState<P>>,
    query: Result<Query<TokenQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Response
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let token = presented_token(&query, &headers, &state.config).map(|(token, _)| token);

    let use_case = SignOutUseCase::new(state.provider.clone());
    use_case.execute(token.as_ref()).await;

    let mut response = Redirect::to(ROOT_PATH).into_response();
    if let Some(value) = state.config.token_cookie().delete_cookie_header() {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

// ============================================================================
// Health / fallback
// ============================================================================

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Any unknown route
pub async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}
