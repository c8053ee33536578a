//! HTTP access to the stats endpoint and the profiles GraphQL query.

use async_trait::async_trait;

use fern_common::StatsError;
use fern_config::schema::{ApiConfig, PollingConfig};

use crate::types::StatsPayload;

pub(crate) const STATS_PATH: &str = "/internal/leafwatch/stats";
pub(crate) const GRAPHQL_PATH: &str = "/graphql";

const EXPLORE_PROFILES_QUERY: &str = "\
query ExploreProfiles($request: ExploreProfilesRequest!) {\
  exploreProfiles(request: $request) { items { id } }\
}";

/// What the pollers need from the upstream API. A trait so tests can
/// substitute scripted sources for the HTTP client.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetch the aggregate stats body.
    async fn fetch_stats(&self) -> Result<StatsPayload, StatsError>;

    /// Fetch the id of the most recently created profile, as an integer.
    ///
    /// Profile ids are assigned sequentially upstream, so the latest id is
    /// a monotone proxy for the total profile count. An approximation by
    /// design, not an exact count.
    async fn latest_profile_id(&self) -> Result<u64, StatsError>;
}

/// reqwest-backed [`StatsSource`].
pub struct StatsClient {
    base_url: String,
    page_size: u32,
    http: reqwest::Client,
}

impl StatsClient {
    pub fn new(api: &ApiConfig, polling: &PollingConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            page_size: polling.profiles_page_size,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(api.connect_timeout_secs))
                .timeout(std::time::Duration::from_secs(api.timeout_secs))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    fn stats_url(&self) -> String {
        format!("{}{STATS_PATH}", self.base_url)
    }

    fn graphql_url(&self) -> String {
        format!("{}{GRAPHQL_PATH}", self.base_url)
    }

    /// Build the GraphQL request body for the latest-created profiles page.
    fn explore_profiles_body(&self) -> serde_json::Value {
        serde_json::json!({
            "query": EXPLORE_PROFILES_QUERY,
            "variables": {
                "request": {
                    "limit": self.page_size,
                    "orderBy": "LATEST_CREATED"
                }
            }
        })
    }
}

#[async_trait]
impl StatsSource for StatsClient {
    async fn fetch_stats(&self) -> Result<StatsPayload, StatsError> {
        let response = self
            .http
            .get(self.stats_url())
            .send()
            .await
            .map_err(|e| StatsError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Http(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StatsError::Decode(e.to_string()))?;
        if body.is_null() {
            return Err(StatsError::NoData);
        }

        serde_json::from_value(body).map_err(|e| StatsError::Decode(e.to_string()))
    }

    async fn latest_profile_id(&self) -> Result<u64, StatsError> {
        let response = self
            .http
            .post(self.graphql_url())
            .json(&self.explore_profiles_body())
            .send()
            .await
            .map_err(|e| StatsError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Http(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| StatsError::Decode(e.to_string()))?;

        extract_latest_profile_id(&body)
    }
}

/// Pull `data.exploreProfiles.items[0].id` out of a GraphQL response and
/// parse it as an integer. An empty page is [`StatsError::NoData`].
pub(crate) fn extract_latest_profile_id(body: &serde_json::Value) -> Result<u64, StatsError> {
    let items = body["data"]["exploreProfiles"]["items"]
        .as_array()
        .ok_or(StatsError::NoData)?;
    let first = items.first().ok_or(StatsError::NoData)?;
    let id = first["id"]
        .as_str()
        .ok_or_else(|| StatsError::Decode("profile id is not a string".into()))?;

    parse_profile_id(id)
}

/// Profile ids are hex strings (`0x5c4f`); decimal is accepted as well.
pub(crate) fn parse_profile_id(id: &str) -> Result<u64, StatsError> {
    let parsed = match id.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => id.parse(),
    };
    parsed.map_err(|e| StatsError::Decode(format!("bad profile id '{id}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StatsClient {
        StatsClient::new(&ApiConfig::default(), &PollingConfig::default())
    }

    #[test]
    fn urls_are_rooted_at_base() {
        let client = client();
        assert_eq!(
            client.stats_url(),
            "https://api.fern.social/internal/leafwatch/stats"
        );
        assert_eq!(client.graphql_url(), "https://api.fern.social/graphql");
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let mut api = ApiConfig::default();
        api.base_url = "http://localhost:4785/".into();
        let client = StatsClient::new(&api, &PollingConfig::default());
        assert_eq!(
            client.stats_url(),
            "http://localhost:4785/internal/leafwatch/stats"
        );
    }

    #[test]
    fn explore_profiles_body_shape() {
        let body = client().explore_profiles_body();
        assert!(body["query"]
            .as_str()
            .unwrap()
            .contains("exploreProfiles(request: $request)"));
        assert_eq!(body["variables"]["request"]["limit"], 10);
        assert_eq!(body["variables"]["request"]["orderBy"], "LATEST_CREATED");
    }

    #[test]
    fn extract_profile_id_from_response() {
        let body = serde_json::json!({
            "data": { "exploreProfiles": { "items": [
                { "id": "0x5c4f" },
                { "id": "0x5c4e" }
            ]}}
        });
        assert_eq!(extract_latest_profile_id(&body).unwrap(), 0x5c4f);
    }

    #[test]
    fn empty_page_is_no_data() {
        let body = serde_json::json!({
            "data": { "exploreProfiles": { "items": [] } }
        });
        assert!(matches!(
            extract_latest_profile_id(&body),
            Err(StatsError::NoData)
        ));
    }

    #[test]
    fn missing_data_section_is_no_data() {
        let body = serde_json::json!({ "errors": [{ "message": "rate limited" }] });
        assert!(matches!(
            extract_latest_profile_id(&body),
            Err(StatsError::NoData)
        ));
    }

    #[test]
    fn non_string_id_is_a_decode_error() {
        let body = serde_json::json!({
            "data": { "exploreProfiles": { "items": [ { "id": 42 } ] } }
        });
        assert!(matches!(
            extract_latest_profile_id(&body),
            Err(StatsError::Decode(_))
        ));
    }

    #[test]
    fn profile_ids_parse_hex_and_decimal() {
        assert_eq!(parse_profile_id("0x10").unwrap(), 16);
        assert_eq!(parse_profile_id("123").unwrap(), 123);
        assert!(parse_profile_id("0xzz").is_err());
        assert!(parse_profile_id("").is_err());
    }
}
