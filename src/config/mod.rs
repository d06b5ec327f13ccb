#[cfg(feature = "cli")]
pub mod cli;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub endpoint: String,
    pub region: Option<String>,
    pub role_arn: Option<String>,
    pub queue: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            region: None,
            role_arn: None,
            queue: None,
            timeout_seconds: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvertError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // ${VAR_NAME} placeholders are resolved from the environment; unresolved
    // ones are left verbatim so validation reports them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        if self.endpoint.contains("${") {
            return Err(ConvertError::InvalidConfigValueError {
                field: "endpoint".to_string(),
                value: self.endpoint.clone(),
                reason: "Unresolved environment variable".to_string(),
            });
        }

        validate_url("endpoint", &self.endpoint)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout as usize, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for ClientConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }

    fn queue(&self) -> Option<&str> {
        self.queue.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_str() {
        let config = ClientConfig::from_toml_str(
            r#"
endpoint = "https://abcd1234.vodconvert.example.com"
region = "eu-west-1"
role_arn = "arn:vodconvert:iam/transcoder"
timeout_seconds = 60
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "https://abcd1234.vodconvert.example.com");
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.timeout_seconds, Some(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("VODCONVERT_TEST_QUEUE", "priority");
        let config = ClientConfig::from_toml_str(
            r#"
endpoint = "https://api.vodconvert.example.com"
queue = "${VODCONVERT_TEST_QUEUE}"
"#,
        )
        .unwrap();
        assert_eq!(config.queue.as_deref(), Some("priority"));
        std::env::remove_var("VODCONVERT_TEST_QUEUE");
    }

    #[test]
    fn test_unresolved_env_var_fails_validation() {
        let config = ClientConfig::from_toml_str(
            r#"
endpoint = "${VODCONVERT_MISSING_ENDPOINT}"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_timeout() {
        let config = ClientConfig::new("https://api.vodconvert.example.com");
        assert_eq!(ConfigProvider::timeout_seconds(&config), 30);
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let config = ClientConfig::new("s3://not-an-endpoint");
        assert!(config.validate().is_err());
    }
}
