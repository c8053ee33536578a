//! Poll cadence configuration for the stats dashboard.

use serde::{Deserialize, Serialize};

/// Intervals for the two independent dashboard pollers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Stats endpoint refetch interval.
    pub stats_interval_ms: u64,
    /// Profile-count query poll interval.
    pub profiles_interval_ms: u64,
    /// Page size for the profile-count query (only the first item is read).
    pub profiles_page_size: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            stats_interval_ms: 1000,
            profiles_interval_ms: 1000,
            profiles_page_size: 10,
        }
    }
}
