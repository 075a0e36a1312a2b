//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the website URL is an absolute URL
//! - Validate value ranges (redirect status, bind address, log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - A non-HTTPS website URL is allowed but logged

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// Status codes accepted for redirect responses.
pub const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("switcher.website_url is empty")]
    EmptyWebsiteUrl,

    #[error("switcher.website_url {url:?} is invalid: {reason}")]
    InvalidWebsiteUrl { url: String, reason: url::ParseError },

    #[error("switcher.redirect_status {0} is not a redirect status")]
    InvalidRedirectStatus(u16),

    #[error("listener.bind_address {0:?} is not a socket address")]
    InvalidBindAddress(String),

    #[error("observability.log_level {0:?} is unknown")]
    InvalidLogLevel(String),
}

pub fn is_redirect_status(status: u16) -> bool {
    REDIRECT_STATUSES.contains(&status)
}

pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let website_url = config.switcher.website_url.trim();
    if website_url.is_empty() {
        errors.push(ValidationError::EmptyWebsiteUrl);
    } else {
        match url::Url::parse(website_url) {
            Ok(parsed) if parsed.scheme() != "https" => {
                tracing::warn!(website_url = %website_url, "Website URL does not use https");
            }
            Ok(_) => {}
            Err(reason) => errors.push(ValidationError::InvalidWebsiteUrl {
                url: website_url.to_string(),
                reason,
            }),
        }
    }

    if !is_redirect_status(config.switcher.redirect_status) {
        errors.push(ValidationError::InvalidRedirectStatus(
            config.switcher.redirect_status,
        ));
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let level = config.observability.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AppConfig {
        let mut config = AppConfig::default();
        config.switcher.website_url = "https://example.com".to_string();
        config
    }

    #[test]
    fn test_valid_config() {
        assert_eq!(validate_config(&valid()), Ok(()));
    }

    #[test]
    fn test_plain_http_url_is_accepted() {
        let mut config = valid();
        config.switcher.website_url = "http://example.com".to_string();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_empty_website_url() {
        let mut config = valid();
        config.switcher.website_url = "  ".to_string();
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::EmptyWebsiteUrl])
        );
    }

    #[test]
    fn test_relative_website_url() {
        let mut config = valid();
        config.switcher.website_url = "example.com/shop".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidWebsiteUrl { .. }]
        ));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = AppConfig::default();
        config.switcher.redirect_status = 404;
        config.listener.bind_address = "localhost".to_string();
        config.observability.log_level = "verbose".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyWebsiteUrl,
                ValidationError::InvalidRedirectStatus(404),
                ValidationError::InvalidBindAddress("localhost".to_string()),
                ValidationError::InvalidLogLevel("verbose".to_string()),
            ]
        );
    }

    #[test]
    fn test_redirect_statuses() {
        for status in REDIRECT_STATUSES {
            assert!(is_redirect_status(status));
        }
        assert!(!is_redirect_status(200));
        assert!(!is_redirect_status(304));
    }
}
