//! Upstream API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Where the client talks to. The stats path (`/internal/leafwatch/stats`)
/// and the GraphQL path (`/graphql`) are fixed relative to `base_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.fern.social".into(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
