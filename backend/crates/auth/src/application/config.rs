//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::config::{EnvSource, flag_or, optional_any, require_any};
use platform::cookie::CookieConfig;
use url::Url;

use crate::domain::value_object::OAuthProvider;
use crate::error::{AuthError, AuthResult};

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Accepted names for the provider base URL, in priority order
pub const PROVIDER_URL_VARS: &[&str] = &["SUPABASE_URL", "SUPABASE_APP_URL"];
/// Accepted names for the provider's public API key, in priority order
pub const API_KEY_VARS: &[&str] = &["SUPABASE_ANON_KEY", "SUPABASE_API_KEY"];

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Identity provider project URL, e.g. `https://xyz.supabase.co`
    pub provider_url: Url,
    /// Public (anon) API key sent as `apikey`
    pub api_key: String,
    /// Upstream OAuth provider offered on the login page
    pub oauth_provider: OAuthProvider,
    /// Origin used for redirects when a request carries no Host header
    pub public_url: Option<String>,
    /// Build redirect origins from `X-Forwarded-*` (set only behind a rewriting proxy)
    pub trust_proxy: bool,
    /// Cookie carrying the access token between requests
    pub token_cookie_name: String,
    /// Token cookie lifetime; matches the provider's default JWT expiry
    pub token_cookie_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl AuthConfig {
    /// Config with defaults for everything except the provider endpoint
    pub fn new(provider_url: &str, api_key: impl Into<String>) -> AuthResult<Self> {
        let provider_url = parse_provider_url(provider_url)?;
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidConfig("API key is empty".to_string()));
        }

        Ok(Self {
            provider_url,
            api_key,
            oauth_provider: OAuthProvider::Google,
            public_url: None,
            trust_proxy: false,
            token_cookie_name: "sb_access_token".to_string(),
            token_cookie_ttl: Duration::from_secs(3600),
            cookie_secure: !cfg!(debug_assertions),
            // Lax so the cookie survives the top-level redirect back from the provider
            cookie_same_site: SameSite::Lax,
        })
    }

    /// Load from environment variables
    ///
    /// The provider URL and key are required; startup must fail without them.
    pub fn from_env<S: EnvSource + ?Sized>(env: &S) -> AuthResult<Self> {
        let provider_url = require_any(env, PROVIDER_URL_VARS)?;
        let api_key = require_any(env, API_KEY_VARS)?;

        let mut config = Self::new(&provider_url, api_key)?;

        if let Some(public_url) = optional_any(env, &["APP_PUBLIC_URL"]) {
            config.public_url = Some(platform::client::parse_origin(&public_url)?);
        }
        config.trust_proxy = flag_or(env, "APP_TRUST_PROXY", config.trust_proxy)?;
        config.cookie_secure = flag_or(env, "AUTH_COOKIE_SECURE", config.cookie_secure)?;

        Ok(config)
    }

    /// Create config for development (insecure cookie)
    pub fn development(provider_url: &str, api_key: impl Into<String>) -> AuthResult<Self> {
        Ok(Self {
            cookie_secure: false,
            ..Self::new(provider_url, api_key)?
        })
    }

    /// Cookie settings for the access token
    pub fn token_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.token_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_cookie_ttl.as_secs()),
        }
    }
}

fn parse_provider_url(raw: &str) -> AuthResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| AuthError::InvalidConfig(format!("provider URL {raw:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AuthError::InvalidConfig(format!(
            "provider URL must be http(s), got {other}"
        ))),
    }
}
