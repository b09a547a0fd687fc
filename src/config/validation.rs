use crate::config::types::{CatalogConfig, Config, HttpConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_catalog_config(&config.catalog)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 120, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates catalog location and limits
fn validate_catalog_config(config: &CatalogConfig) -> Result<(), ConfigError> {
    validate_http_url("base_url", &config.base_url)?;
    validate_http_url("first_page", &config.first_page)?;

    if config.safety_cap < 1 {
        return Err(ConfigError::Validation(format!(
            "safety_cap must be >= 1, got {}",
            config.safety_cap
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.catalog_file.is_empty() {
        return Err(ConfigError::Validation(
            "catalog_file cannot be empty".to_string(),
        ));
    }

    if config.listing_file.is_empty() {
        return Err(ConfigError::Validation(
            "listing_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that `value` is an absolute http(s) URL
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}
