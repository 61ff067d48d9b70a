use crate::config::{DEFAULT_GEOCODER_ENDPOINT, DEFAULT_TIMEZONE_ENDPOINT};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{BlueprintError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_geocoder_endpoint() -> String {
    DEFAULT_GEOCODER_ENDPOINT.to_string()
}

fn default_timezone_endpoint() -> String {
    DEFAULT_TIMEZONE_ENDPOINT.to_string()
}

fn default_username() -> String {
    "demo".to_string()
}

fn default_timeout() -> u64 {
    10
}

/// TOML-backed lookup configuration, for deployments where the
/// endpoints and strictness are fixed per environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub lookups: LookupsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupsConfig {
    #[serde(default = "default_geocoder_endpoint")]
    pub geocoder_endpoint: String,
    #[serde(default = "default_timezone_endpoint")]
    pub timezone_endpoint: String,
    #[serde(default = "default_username")]
    pub geonames_username: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub strict_timezone: bool,
}

impl FileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&content).map_err(|e| BlueprintError::Config {
            field: path.display().to_string(),
            reason: format!("TOML parse error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for FileConfig {
    fn geocoder_endpoint(&self) -> &str {
        &self.lookups.geocoder_endpoint
    }

    fn timezone_endpoint(&self) -> &str {
        &self.lookups.timezone_endpoint
    }

    fn geonames_username(&self) -> &str {
        &self.lookups.geonames_username
    }

    fn timeout_seconds(&self) -> u64 {
        self.lookups.timeout_seconds
    }

    fn strict_timezone(&self) -> bool {
        self.lookups.strict_timezone
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_url("lookups.geocoder_endpoint", &self.lookups.geocoder_endpoint)?;
        validate_url("lookups.timezone_endpoint", &self.lookups.timezone_endpoint)?;
        validate_positive_number("lookups.timeout_seconds", self.lookups.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let toml_str = r#"
            [lookups]
            geocoder_endpoint = "https://geo.example.com/search"
            timezone_endpoint = "https://tz.example.com/timezoneJSON"
            geonames_username = "someuser"
            timeout_seconds = 5
            strict_timezone = true
        "#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.geocoder_endpoint(), "https://geo.example.com/search");
        assert_eq!(config.geonames_username(), "someuser");
        assert_eq!(config.timeout_seconds(), 5);
        assert!(config.strict_timezone());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: FileConfig = toml::from_str("[lookups]\n").unwrap();
        assert_eq!(config.geocoder_endpoint(), DEFAULT_GEOCODER_ENDPOINT);
        assert_eq!(config.timezone_endpoint(), DEFAULT_TIMEZONE_ENDPOINT);
        assert_eq!(config.geonames_username(), "demo");
        assert_eq!(config.timeout_seconds(), 10);
        assert!(!config.strict_timezone());
    }

    #[test]
    fn bad_endpoint_fails_validation() {
        let config: FileConfig =
            toml::from_str("[lookups]\ngeocoder_endpoint = \"ftp://nope\"\n").unwrap();
        assert!(config.validate().is_err());
    }
}
