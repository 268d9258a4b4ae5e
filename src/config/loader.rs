//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ConfigIssue};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_issues(.0))]
    Validation(Vec<ConfigIssue>),
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the effective configuration: file (or defaults), then overrides,
/// then validation.
pub fn resolve_config(
    path: Option<&Path>,
    bind_override: Option<String>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(bind_address) = bind_override {
        config.listener.bind_address = bind_address;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "simple-items-api-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_file() {
        let path = write_temp("valid", "[timeouts]\nrequest_secs = 5\n");
        let config = resolve_config(Some(path.as_path()), None).unwrap();
        assert_eq!(config.timeouts.request_secs, 5);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = write_temp("invalid", "[timeouts]\nrequest_secs = 0\n");
        let err = resolve_config(Some(path.as_path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref issues) if issues.len() == 1));
        assert_eq!(
            err.to_string(),
            "Validation failed: timeouts.request_secs: must be greater than 0"
        );
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = write_temp("malformed", "[listener\n");
        assert!(matches!(resolve_config(Some(path.as_path()), None), Err(ConfigError::Parse(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/simple-items-api.toml");
        assert!(matches!(resolve_config(Some(path), None), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_resolve_applies_bind_override() {
        let config = resolve_config(None, Some("127.0.0.1:0".into())).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:0");

        let err = resolve_config(None, Some("nowhere".into())).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
