//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Detect documentation URLs that would collide with API routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ConfigIssue>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::schema::ServiceConfig;

/// Paths owned by the API route table.
const API_PATHS: &[&str] = &["/", "/health", "/items", "/items/"];

/// One semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted path of the offending field, e.g. `listener.bind_address`.
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a configuration, collecting every issue found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ConfigIssue>> {
    let mut issues = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        issues.push(ConfigIssue::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    if config.timeouts.request_secs == 0 {
        issues.push(ConfigIssue::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.security.max_body_size == 0 {
        issues.push(ConfigIssue::new("security.max_body_size", "must be greater than 0"));
    }

    if let Err(e) = EnvFilter::try_new(&config.observability.log_level) {
        issues.push(ConfigIssue::new(
            "observability.log_level",
            format!("invalid filter directive: {e}"),
        ));
    }

    if config.observability.metrics_enabled {
        let metrics_address = &config.observability.metrics_address;
        if metrics_address.parse::<SocketAddr>().is_err() {
            issues.push(ConfigIssue::new(
                "observability.metrics_address",
                format!("'{metrics_address}' is not a socket address"),
            ));
        } else if *metrics_address == config.listener.bind_address {
            issues.push(ConfigIssue::new(
                "observability.metrics_address",
                "must differ from listener.bind_address",
            ));
        }
    }

    if config.docs.enabled {
        check_docs_urls(config, &mut issues);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn check_docs_urls(config: &ServiceConfig, issues: &mut Vec<ConfigIssue>) {
    let urls = [
        ("docs.openapi_url", &config.docs.openapi_url),
        ("docs.docs_url", &config.docs.docs_url),
        ("docs.redoc_url", &config.docs.redoc_url),
    ];

    for (i, (field, url)) in urls.iter().enumerate() {
        if !url.starts_with('/') {
            issues.push(ConfigIssue::new(field, "must start with '/'"));
        } else if url.contains(['{', '}', '*']) {
            issues.push(ConfigIssue::new(field, "must not contain path parameters"));
        } else if API_PATHS.contains(&url.as_str()) || url.starts_with("/items/") {
            issues.push(ConfigIssue::new(field, format!("'{url}' collides with an API route")));
        }

        if urls[..i].iter().any(|(_, other)| other == url) {
            issues.push(ConfigIssue::new(field, format!("'{url}' is already used")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(issues: &[ConfigIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_issue() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.security.max_body_size = 0;

        let issues = validate_config(&config).unwrap_err();
        assert_eq!(
            fields(&issues),
            vec!["listener.bind_address", "timeouts.request_secs", "security.max_body_size"]
        );
    }

    #[test]
    fn test_docs_url_collisions() {
        let mut config = ServiceConfig::default();
        config.docs.openapi_url = "/health".into();
        config.docs.docs_url = "docs".into();
        config.docs.redoc_url = "/items/redoc".into();

        let issues = validate_config(&config).unwrap_err();
        assert_eq!(
            fields(&issues),
            vec!["docs.openapi_url", "docs.docs_url", "docs.redoc_url"]
        );
    }

    #[test]
    fn test_duplicate_docs_urls() {
        let mut config = ServiceConfig::default();
        config.docs.redoc_url = "/docs".into();

        let issues = validate_config(&config).unwrap_err();
        assert_eq!(issues[0].to_string(), "docs.redoc_url: '/docs' is already used");
    }

    #[test]
    fn test_docs_urls_ignored_when_disabled() {
        let mut config = ServiceConfig::default();
        config.docs.enabled = false;
        config.docs.docs_url = "/".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let issues = validate_config(&config).unwrap_err();
        assert_eq!(fields(&issues), vec!["observability.metrics_address"]);
    }
}
