//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server-side configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the document backend the client talks to.
    /// Example: http://103.245.237.127
    pub api_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("DOCUVAULT_API_BASE").ok(),
        }
    }

    /// Check if a backend base URL is configured
    pub fn has_api_base(&self) -> bool {
        self.api_base_url.is_some()
    }

    /// Backend base URL, falling back to same-origin relative paths.
    pub fn api_base_or_default(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or("")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_base_url() {
        let config = Config {
            api_base_url: Some("http://backend.internal:8080".to_string()),
        };

        assert!(config.has_api_base());
        assert_eq!(config.api_base_or_default(), "http://backend.internal:8080");
    }

    #[test]
    fn test_config_without_base_url() {
        let config = Config { api_base_url: None };

        assert!(!config.has_api_base());
        // Same-origin fallback is the empty prefix.
        assert_eq!(config.api_base_or_default(), "");
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; just exercise the accessors.
        let config = Config::from_env();
        let _ = config.has_api_base();
        let _ = config.api_base_or_default();
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            api_base_url: Some("http://localhost:9000".to_string()),
        };

        let cloned = config.clone();
        assert_eq!(config.api_base_url, cloned.api_base_url);
    }
}
