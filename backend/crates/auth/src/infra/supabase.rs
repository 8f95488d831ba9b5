//! Supabase Auth (GoTrue) client
//!
//! Implements [`IdentityProvider`] against the hosted auth REST API:
//! - `GET  /auth/v1/authorize` (built locally, the browser visits it)
//! - `GET  /auth/v1/user`
//! - `POST /auth/v1/logout`

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::application::config::AuthConfig;
use crate::domain::entity::ProviderUser;
use crate::domain::provider::IdentityProvider;
use crate::domain::value_object::{AccessToken, OAuthProvider};
use crate::error::{AuthError, AuthResult};

const USER_AGENT: &str = concat!("supa-oauth-web/", env!("CARGO_PKG_VERSION"));

/// Error payload shapes returned by the auth API
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn parse(body: &str) -> String {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        parsed
            .msg
            .or(parsed.message)
            .or(parsed.error_description)
            .or(parsed.error)
            .unwrap_or_else(|| body.chars().take(200).collect())
    }
}

/// HTTP client for the Supabase auth API
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl SupabaseClient {
    /// Create a client; timeouts are reqwest's defaults
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AuthError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing connection pool
    pub fn with_client(client: Client, config: &AuthConfig) -> Self {
        // Url::join replaces the last path segment unless the base ends in '/'
        let mut base_url = config.provider_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> AuthResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError::Internal(format!("Invalid auth endpoint {path}: {e}")))
    }

    fn network_error(e: reqwest::Error) -> AuthError {
        if e.is_decode() {
            AuthError::Provider {
                status: e.status().map(|s| s.as_u16()).unwrap_or(200),
                message: format!("Failed to parse response: {e}"),
            }
        } else {
            AuthError::Network(e.to_string())
        }
    }

    async fn provider_error(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AuthError::Provider {
            status: status.as_u16(),
            message: ErrorBody::parse(&body),
        }
    }
}

impl IdentityProvider for SupabaseClient {
    async fn authorize_url(
        &self,
        provider: OAuthProvider,
        redirect_to: &str,
    ) -> AuthResult<String> {
        let mut url = self.endpoint("auth/v1/authorize")?;
        url.query_pairs_mut()
            .append_pair("provider", provider.as_str())
            .append_pair("redirect_to", redirect_to);

        Ok(url.into())
    }

    async fn get_user(&self, token: &AccessToken) -> AuthResult<ProviderUser> {
        let url = self.endpoint("auth/v1/user")?;

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(Self::network_error)?;

        match response.status() {
            status if status.is_success() => {
                response.json::<ProviderUser>().await.map_err(Self::network_error)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let message = ErrorBody::parse(&response.text().await.unwrap_or_default());
                tracing::debug!(message = %message, "Token rejected by identity provider");
                Err(AuthError::TokenRejected)
            }
            _ => Err(Self::provider_error(response).await),
        }
    }

    async fn sign_out(&self, token: &AccessToken) -> AuthResult<()> {
        let mut url = self.endpoint("auth/v1/logout")?;
        url.query_pairs_mut().append_pair("scope", "global");

        let response = self
            .client
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(Self::network_error)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            // Session already gone at the provider: nothing left to revoke
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                tracing::debug!(status = %response.status(), "Token already invalid at sign out");
                Ok(())
            }
            _ => Err(Self::provider_error(response).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> SupabaseClient {
        let config = AuthConfig::development(&server.uri(), "anon-key").unwrap();
        SupabaseClient::new(&config).unwrap()
    }

    fn token(raw: &str) -> AccessToken {
        AccessToken::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_authorize_url_encodes_redirect() {
        let config = AuthConfig::development("https://xyz.supabase.co", "anon-key").unwrap();
        let client = SupabaseClient::new(&config).unwrap();

        let url = client
            .authorize_url(OAuthProvider::Google, "http://localhost:8000")
            .await
            .unwrap();

        assert_eq!(
            url,
            "https://xyz.supabase.co/auth/v1/authorize?provider=google&redirect_to=http%3A%2F%2Flocalhost%3A8000"
        );
    }

    #[tokio::test]
    async fn test_authorize_url_keeps_base_path() {
        let config = AuthConfig::development("http://localhost:9999/proxy", "anon-key").unwrap();
        let client = SupabaseClient::new(&config).unwrap();

        let url = client
            .authorize_url(OAuthProvider::Google, "http://app")
            .await
            .unwrap();

        assert!(url.starts_with("http://localhost:9999/proxy/auth/v1/authorize?provider=google"));
    }

    #[tokio::test]
    async fn test_get_user_sends_key_and_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer good-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "user-1",
                "aud": "authenticated",
                "email": "someone@example.com"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = client_for(&server)
            .get_user(&token("good-token"))
            .await
            .unwrap();

        assert_eq!(user.id, "user-1");
        assert_eq!(user.email.as_deref(), Some("someone@example.com"));
    }

    #[tokio::test]
    async fn test_get_user_unauthorized_is_token_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": 401,
                "error_code": "bad_jwt",
                "msg": "invalid JWT: token is expired"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_user(&token("expired"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::TokenRejected));
    }

    #[tokio::test]
    async fn test_get_user_server_error_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "database down"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_user(&token("any"))
            .await
            .unwrap_err();

        match err {
            AuthError::Provider { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_user_unreachable_is_network_error() {
        // Nothing listens on the discard port
        let config = AuthConfig::development("http://127.0.0.1:9", "anon-key").unwrap();
        let client = SupabaseClient::new(&config).unwrap();

        let err = client.get_user(&token("any")).await.unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
    }

    #[tokio::test]
    async fn test_sign_out_posts_logout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .and(query_param("scope", "global"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).sign_out(&token("tok")).await.unwrap();
    }

    #[tokio::test]
    async fn test_sign_out_already_invalid_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/v1/logout"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        assert!(client_for(&server).sign_out(&token("tok")).await.is_ok());
    }

    #[test]
    fn test_error_body_fallbacks() {
        assert_eq!(ErrorBody::parse(r#"{"msg":"a"}"#), "a");
        assert_eq!(ErrorBody::parse(r#"{"error_description":"b"}"#), "b");
        assert_eq!(ErrorBody::parse("plain text"), "plain text");
    }
}
