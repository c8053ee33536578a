//! Structural config validation.

use fern_common::ConfigError;

use crate::schema::FernConfig;

/// Validate a parsed config. Returns the first problem found.
pub fn validate(config: &FernConfig) -> Result<(), ConfigError> {
    if config.api.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api.base_url must not be empty".into(),
        ));
    }
    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "api.base_url must be http(s), got '{}'",
            config.api.base_url
        )));
    }
    if config.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "api.timeout_secs must be > 0".into(),
        ));
    }
    if config.polling.stats_interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "polling.stats_interval_ms must be > 0".into(),
        ));
    }
    if config.polling.profiles_interval_ms == 0 {
        return Err(ConfigError::ValidationError(
            "polling.profiles_interval_ms must be > 0".into(),
        ));
    }
    if config.polling.profiles_page_size == 0 || config.polling.profiles_page_size > 50 {
        return Err(ConfigError::ValidationError(format!(
            "polling.profiles_page_size must be 1..=50, got {}",
            config.polling.profiles_page_size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&FernConfig::default()).is_ok());
    }

    #[test]
    fn empty_base_url_rejected() {
        let mut config = FernConfig::default();
        config.api.base_url = "  ".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let mut config = FernConfig::default();
        config.api.base_url = "ftp://api.fern.social".into();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn zero_intervals_rejected() {
        let mut config = FernConfig::default();
        config.polling.stats_interval_ms = 0;
        assert!(validate(&config).is_err());

        let mut config = FernConfig::default();
        config.polling.profiles_interval_ms = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn page_size_bounds() {
        let mut config = FernConfig::default();
        config.polling.profiles_page_size = 0;
        assert!(validate(&config).is_err());

        config.polling.profiles_page_size = 51;
        assert!(validate(&config).is_err());

        config.polling.profiles_page_size = 50;
        assert!(validate(&config).is_ok());
    }
}
