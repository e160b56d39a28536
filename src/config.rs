//! Application configuration
//!
//! Settings are read from an optional YAML file. Every field has a default,
//! so an empty file (or no file) is a valid configuration. Command-line flags
//! override file values.
//!
//! ```yaml
//! base_url: https://swapi.dev
//! people_path: /api/people/
//! timeout_secs: 15
//! scroll_threshold: 10
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::{ControllerConfig, DEFAULT_SCROLL_THRESHOLD};
use crate::source::{PeopleSource, DEFAULT_PAGE_PARAM, DEFAULT_PEOPLE_PATH};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev";

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scheme and host of the API
    pub base_url: String,

    /// Path of the people resource
    pub people_path: String,

    /// Query parameter carrying the page number
    pub page_param: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: Option<String>,

    /// Minimum list length before infinite scroll prefetches
    pub scroll_threshold: usize,

    /// Upper bound on a single page fetch, in seconds
    pub fetch_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            people_path: DEFAULT_PEOPLE_PATH.to_string(),
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            timeout_secs: 30,
            user_agent: None,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            fetch_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load and validate a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        debug!("Loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Parse and validate a YAML config string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }
        if self.fetch_timeout_secs == Some(0) {
            return Err(Error::invalid_value(
                "fetch_timeout_secs",
                "must be positive",
            ));
        }
        if self.page_param.is_empty() {
            return Err(Error::invalid_value("page_param", "must not be empty"));
        }
        Ok(())
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .header("Accept", "application/json");
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Controller settings derived from this config
    pub fn controller_config(&self) -> ControllerConfig {
        let config = ControllerConfig::new().with_scroll_threshold(self.scroll_threshold);
        match self.fetch_timeout_secs {
            Some(secs) => config.with_fetch_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }

    /// Build the people page source
    pub fn people_source(&self) -> Result<PeopleSource> {
        let client = HttpClient::with_config(self.http_config())?;
        Ok(PeopleSource::new(client)
            .with_path(&self.people_path)
            .with_page_param(&self.page_param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://swapi.dev");
        assert_eq!(config.people_path, "/api/people/");
        assert_eq!(config.page_param, "page");
        assert_eq!(config.scroll_threshold, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = AppConfig::from_yaml(
            r"
base_url: http://localhost:8000
scroll_threshold: 20
fetch_timeout_secs: 5
",
        )
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.scroll_threshold, 20);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(
            config.controller_config(),
            ControllerConfig::new()
                .with_scroll_threshold(20)
                .with_fetch_timeout(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(matches!(
            AppConfig::from_yaml("timeout_secs: [1, 2]"),
            Err(Error::YamlParse(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml("base_url: not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml("base_url: ftp://swapi.dev"),
            Err(Error::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_yaml("timeout_secs: 0"),
            Err(Error::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            AppConfig::from_yaml("fetch_timeout_secs: 0"),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_http_config() {
        let config = AppConfig {
            user_agent: Some("pager-test/0.1".to_string()),
            timeout_secs: 7,
            ..AppConfig::default()
        };
        let http = config.http_config();
        assert_eq!(http.base_url.as_deref(), Some("https://swapi.dev"));
        assert_eq!(http.timeout, Duration::from_secs(7));
        assert_eq!(http.user_agent, "pager-test/0.1");
        assert_eq!(
            http.default_headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "people_path: /api/characters/").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.people_path, "/api/characters/");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
