use crate::utils::error::{BlueprintError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BlueprintError::Config {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BlueprintError::Config {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BlueprintError::Config {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BlueprintError::input(format!(
            "{} cannot be empty",
            field_name
        )));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(BlueprintError::Config {
            field: field_name.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// An MBTI code is exactly four ASCII letters (e.g. "INFJ"). Empty is
/// allowed and means "not provided".
pub fn validate_mbti(value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    if value.len() != 4 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(BlueprintError::input(format!(
            "MBTI code must be 4 letters, got '{}'",
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation_accepts_http_and_https() {
        assert!(validate_url("endpoint", "https://example.com/search").is_ok());
        assert!(validate_url("endpoint", "http://example.com").is_ok());
    }

    #[test]
    fn url_validation_rejects_other_schemes() {
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "not a url").is_err());
    }

    #[test]
    fn mbti_validation() {
        assert!(validate_mbti("").is_ok());
        assert!(validate_mbti("INFJ").is_ok());
        assert!(validate_mbti("entp").is_ok());
        assert!(validate_mbti("INF").is_err());
        assert!(validate_mbti("INFJX").is_err());
        assert!(validate_mbti("IN4J").is_err());
    }

    #[test]
    fn non_empty_validation() {
        assert!(validate_non_empty("name", "Ada").is_ok());
        assert!(validate_non_empty("name", "  ").is_err());
    }
}
