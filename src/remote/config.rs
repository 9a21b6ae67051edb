//! Backend connection configuration.

use std::env;

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backend project
    pub base_url: String,

    /// Publishable API key sent with every request
    pub api_key: String,

    /// Schema exposed through the REST surface
    pub schema: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl RemoteConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `BACKEND_URL`: project base URL
    /// - `BACKEND_ANON_KEY`: publishable API key
    /// - `BACKEND_SCHEMA`: exposed schema (default: public)
    /// - `BACKEND_REQUEST_TIMEOUT`: request timeout in seconds (default: 10)
    ///
    /// # Panics
    ///
    /// Panics if `BACKEND_URL` or `BACKEND_ANON_KEY` is not set
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("BACKEND_URL").expect("BACKEND_URL must be set"),
            api_key: env::var("BACKEND_ANON_KEY").expect("BACKEND_ANON_KEY must be set"),
            schema: env::var("BACKEND_SCHEMA").unwrap_or_else(|_| "public".to_string()),
            request_timeout_secs: env::var("BACKEND_REQUEST_TIMEOUT")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("BACKEND_REQUEST_TIMEOUT must be a valid u64"),
        }
    }

    /// Create a default configuration for local development
    pub fn development() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: "local-anon-key".to_string(),
            schema: "public".to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self::development()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_defaults() {
        let config = RemoteConfig::development();
        assert_eq!(config.schema, "public");
        assert_eq!(config.request_timeout_secs, 10);
    }
}
