//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No access token in the request
    #[error("No access token presented")]
    MissingToken,

    /// The provider refused the token (invalid, expired or revoked)
    #[error("Access token rejected by identity provider")]
    TokenRejected,

    /// The provider knows the user but has no email for them
    #[error("Identity provider returned a user without email")]
    MissingEmail,

    /// The provider gave no URL to start the OAuth flow
    #[error("Identity provider returned no OAuth URL")]
    MissingOAuthUrl,

    /// The provider could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with an unexpected status or body
    #[error("Identity provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The request origin could not be determined
    #[error("Invalid request origin: {0}")]
    Origin(String),

    /// Starting the OAuth flow failed
    #[error("OAuth error: {0}")]
    OAuthInitiation(Box<AuthError>),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Wrap a failure of the login redirect; always answered with 500
    pub fn oauth_initiation(err: AuthError) -> Self {
        match err {
            already @ AuthError::OAuthInitiation(_) => already,
            other => AuthError::OAuthInitiation(Box::new(other)),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken | AuthError::TokenRejected | AuthError::MissingEmail => {
                ErrorKind::Unauthorized
            }
            AuthError::Network(_) => ErrorKind::ServiceUnavailable,
            AuthError::Provider { .. } => ErrorKind::BadGateway,
            AuthError::Origin(_) => ErrorKind::BadRequest,
            AuthError::MissingOAuthUrl
            | AuthError::OAuthInitiation(_)
            | AuthError::InvalidConfig(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// The provider has answered and the token is no use for a session
    ///
    /// Outages (`Network`, `Provider`) say nothing about the token itself.
    pub fn invalidates_token(&self) -> bool {
        matches!(self, AuthError::TokenRejected | AuthError::MissingEmail)
    }

    /// Convert to AppError; a failed login redirect keeps its cause as source
    pub fn into_app_error(self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::OAuthInitiation(inner) => err
                .with_action("Please try logging in again")
                .with_source(*inner),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Network(msg) => {
                tracing::error!(error = %msg, "Identity provider unreachable");
            }
            AuthError::Provider { status, message } => {
                tracing::error!(status = *status, message = %message, "Identity provider error");
            }
            AuthError::OAuthInitiation(inner) => {
                tracing::error!(error = %inner, "Failed to initiate OAuth flow");
            }
            AuthError::InvalidConfig(msg) | AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::MissingOAuthUrl => {
                tracing::error!("Identity provider returned no OAuth URL");
            }
            AuthError::Origin(origin) => {
                tracing::warn!(origin = %origin, "Could not determine request origin");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<platform::client::OriginError> for AuthError {
    fn from(err: platform::client::OriginError) -> Self {
        AuthError::Origin(err.to_string())
    }
}

impl From<platform::config::ConfigError> for AuthError {
    fn from(err: platform::config::ConfigError) -> Self {
        AuthError::InvalidConfig(err.to_string())
    }
}
