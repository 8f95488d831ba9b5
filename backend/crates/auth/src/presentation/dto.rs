//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Token query
// ============================================================================

/// Query string of `/` and `/logout`
///
/// After the OAuth callback the provider's token parameters land here;
/// only `access_token` is read, the rest is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenQuery {
    pub access_token: Option<String>,
}

// ============================================================================
// Health
// ============================================================================

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub const SERVICE_NAME: &'static str = "supabase-oauth-mvp";

    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: Self::SERVICE_NAME.to_string(),
        }
    }
}
