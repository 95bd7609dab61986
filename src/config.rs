// ============================================================================
// CONFIG - Compile-time configuration (option_env! + build.rs .env loader)
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LOGIN_STATUS_CLEAR_MS, DEFAULT_STATUS_CLEAR_MS,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base url must not be empty")]
    EmptyBaseUrl,
    #[error("API base url must use http:// or https:// and include a host")]
    InvalidBaseUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Collection endpoint of the remote record store, without trailing slash
    pub api_base_url: String,
    pub enable_logging: bool,
    /// Auto-clear delay of the "login successful" message
    pub login_status_clear_ms: u32,
    /// Auto-clear delay of every other success message
    pub status_clear_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            enable_logging: true,
            login_status_clear_ms: DEFAULT_LOGIN_STATUS_CLEAR_MS,
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("ENABLE_LOGGING"),
            option_env!("LOGIN_STATUS_CLEAR_MS"),
            option_env!("STATUS_CLEAR_MS"),
        )
    }

    fn from_values(
        api_base_url: Option<&str>,
        enable_logging: Option<&str>,
        login_status_clear_ms: Option<&str>,
        status_clear_ms: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let api_base_url = match api_base_url.map(normalize_base_url) {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                log::warn!("⚠️ API_BASE_URL rejected ({}), using {}", e, DEFAULT_API_BASE_URL);
                defaults.api_base_url
            }
            None => defaults.api_base_url,
        };

        Self {
            api_base_url,
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
            login_status_clear_ms: login_status_clear_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.login_status_clear_ms),
            status_clear_ms: status_clear_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.status_clear_ms),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    let Some((scheme, remainder)) = trimmed.split_once("://") else {
        return Err(ConfigError::InvalidBaseUrl);
    };
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidBaseUrl);
    }
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ConfigError::InvalidBaseUrl);
    }
    Ok(trimmed.to_string())
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_student_endpoint() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config.api_base_url(), "http://localhost:8080/student");
        assert!(config.is_logging_enabled());
        assert_eq!(config.login_status_clear_ms, 2000);
        assert_eq!(config.status_clear_ms, 3000);
    }

    #[test]
    fn base_url_is_trimmed_and_loses_trailing_slash() {
        let normalized = normalize_base_url("  https://api.example.edu/student/ ").expect("valid url");
        assert_eq!(normalized, "https://api.example.edu/student");
    }

    #[test]
    fn base_url_requires_http_scheme_and_host() {
        assert_eq!(normalize_base_url(""), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(normalize_base_url("localhost:8080"), Err(ConfigError::InvalidBaseUrl));
        assert_eq!(normalize_base_url("ftp://host/student"), Err(ConfigError::InvalidBaseUrl));
        assert_eq!(normalize_base_url("http:///student"), Err(ConfigError::InvalidBaseUrl));
    }

    #[test]
    fn invalid_env_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(Some("not a url"), Some("maybe"), Some("soon"), Some("-1"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn env_values_override_defaults() {
        let config = AppConfig::from_values(
            Some("http://10.0.0.5:9000/student/"),
            Some("false"),
            Some("500"),
            Some("1500"),
        );
        assert_eq!(config.api_base_url(), "http://10.0.0.5:9000/student");
        assert!(!config.is_logging_enabled());
        assert_eq!(config.login_status_clear_ms, 500);
        assert_eq!(config.status_clear_ms, 1500);
    }
}
