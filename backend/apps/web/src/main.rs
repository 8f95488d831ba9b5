//! Web Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors go through `auth::AuthError` / `kernel::error::AppError`.

use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use auth::{AuthConfig, SupabaseClient, auth_router};
use axum::Router;
use platform::config::{EnvSource, ProcessEnv, parse_or};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Listen address settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ServerConfig {
    host: IpAddr,
    port: u16,
}

impl ServerConfig {
    fn from_env<S: EnvSource + ?Sized>(env: &S) -> anyhow::Result<Self> {
        Ok(Self {
            host: parse_or(env, "APP_HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: parse_or(env, "APP_PORT", 8000)?,
        })
    }

    fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn build_app(config: AuthConfig) -> anyhow::Result<Router> {
    let provider = SupabaseClient::new(&config)?;

    Ok(auth_router(provider, config).layer(TraceLayer::new_for_http()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,auth=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Provider settings are mandatory; refuse to start without them
    let auth_config = AuthConfig::from_env(&ProcessEnv)
        .context("Missing or invalid identity provider configuration, check your .env file")?;
    let server_config = ServerConfig::from_env(&ProcessEnv)?;

    tracing::info!(
        provider_url = %auth_config.provider_url,
        cookie_secure = auth_config.cookie_secure,
        trust_proxy = auth_config.trust_proxy,
        "Identity provider configured"
    );

    let app = build_app(auth_config)?;

    // Start server
    let addr = server_config.addr();
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
