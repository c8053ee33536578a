//! Configuration schema. All sections use serde defaults so partial
//! configs work out of the box.

mod api;
mod logging;
mod polling;

pub use api::ApiConfig;
pub use logging::LoggingConfig;
pub use polling::PollingConfig;

use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FernConfig {
    pub api: ApiConfig,
    pub polling: PollingConfig,
    pub logging: LoggingConfig,
}
