//! AMap service configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Configuration for the AMap web service client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmapConfig {
    /// Web service key, sent as the `key` query parameter on every request
    ///
    /// Sensitive - uses `SecretString` so it never shows up in logs
    #[serde(skip_serializing, default = "default_api_key")]
    pub api_key: SecretString,

    /// Geocoding endpoint
    #[serde(default = "default_geocode_url")]
    pub geocode_url: String,

    /// Walking directions endpoint
    #[serde(default = "default_walking_url")]
    pub walking_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra detail blocks requested from the directions endpoint
    #[serde(default = "default_show_fields")]
    pub show_fields: String,
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

fn default_geocode_url() -> String {
    "https://restapi.amap.com/v3/geocode/geo".to_string()
}

fn default_walking_url() -> String {
    "https://restapi.amap.com/v5/direction/walking".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_show_fields() -> String {
    "cost,navi,polyline".to_string()
}

impl Default for AmapConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            geocode_url: default_geocode_url(),
            walking_url: default_walking_url(),
            timeout_secs: default_timeout_secs(),
            show_fields: default_show_fields(),
        }
    }
}

impl AmapConfig {
    /// Create a configuration with the given key and default endpoints
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration pointing both endpoints at a local base URL
    ///
    /// Paths mirror the real service so mock servers can match on them.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            api_key: SecretString::from("test-key".to_string()),
            geocode_url: format!("{base}/v3/geocode/geo"),
            walking_url: format!("{base}/v5/direction/walking"),
            timeout_secs: 5,
            show_fields: default_show_fields(),
        }
    }

    /// Get the API key as a string slice
    #[must_use]
    pub fn api_key_str(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key_str().trim().is_empty() {
            return Err("api_key must be set".to_string());
        }

        if self.geocode_url.is_empty() {
            return Err("geocode_url must not be empty".to_string());
        }

        if self.walking_url.is_empty() {
            return Err("walking_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
