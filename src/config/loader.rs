//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read and deserialize a TOML file without semantic checks.
pub fn parse_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from an optional TOML file, apply overrides, then
/// validate the result.
pub fn load_config<F>(path: Option<&Path>, overrides: F) -> Result<AppConfig, ConfigError>
where
    F: FnOnce(&mut AppConfig),
{
    let mut config = match path {
        Some(path) => parse_config(path)?,
        None => AppConfig::default(),
    };
    overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "https-switcher-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let path = write_temp(
            "valid",
            r#"
            [listener]
            bind_address = "127.0.0.1:8080"

            [switcher]
            website_url = "https://example.com"
            redirect_status = 301
            "#,
        );

        let config = load_config(Some(&path), |_| {}).unwrap();
        assert_eq!(config.switcher.website_url, "https://example.com");
        assert_eq!(config.switcher.redirect_status, 301);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_reports_all_validation_errors() {
        let path = write_temp(
            "invalid",
            r#"
            [listener]
            bind_address = "nowhere"

            [switcher]
            redirect_status = 200
            "#,
        );

        match load_config(Some(&path), |_| {}) {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {:?}", other),
        }
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_parse_error() {
        let path = write_temp("broken", "[switcher\nwebsite_url = 1");
        assert!(matches!(parse_config(&path), Err(ConfigError::Parse(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/https-switcher.toml");
        assert!(matches!(load_config(Some(path), |_| {}), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_overrides_apply_before_validation() {
        let path = write_temp(
            "overrides",
            r#"
            [listener]
            bind_address = "127.0.0.1:8080"
            "#,
        );

        assert!(matches!(
            load_config(Some(&path), |_| {}),
            Err(ConfigError::Validation(_))
        ));

        let config = load_config(Some(&path), |c| {
            c.switcher.website_url = "https://example.com".to_string();
        })
        .unwrap();
        assert_eq!(config.switcher.website_url, "https://example.com");
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None, |c| {
            c.switcher.website_url = "https://example.com".to_string();
            c.listener.bind_address = "127.0.0.1:9000".to_string();
        })
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert!(config.switcher.exit);
    }
}
