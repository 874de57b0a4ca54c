//! Application configuration
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional TOML file, then `WALKNAV_*` environment variables. Nested keys use
//! a double underscore, e.g. `WALKNAV_AMAP__API_KEY`.

use std::path::Path;

use integration_amap::AmapConfig;
use serde::Deserialize;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "walknav";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "WALKNAV";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// AMap web service settings
    #[serde(default)]
    pub amap: AmapConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    ///
    /// An explicitly given `path` must exist; the default `walknav.toml` is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, environment())
    }

    fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            .add_source(env);

        let config = builder.build()?;
        config.try_deserialize()
    }
}

/// Environment values stay strings; numeric fields are converted on deserialize
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_config_has_no_key() {
        let config = AppConfig::default();
        assert!(config.amap.validate().is_err());
        assert_eq!(config.amap.timeout_secs, 10);
    }

    #[test]
    fn load_from_explicit_file() {
        let file = write_config(
            r#"
[amap]
api_key = "file-key"
timeout_secs = 3
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.amap.api_key_str(), "file-key");
        assert_eq!(config.amap.timeout_secs, 3);
        assert_eq!(
            config.amap.geocode_url,
            "https://restapi.amap.com/v3/geocode/geo"
        );
        assert!(config.amap.validate().is_ok());
    }

    #[test]
    fn load_overrides_endpoints() {
        let file = write_config(
            r#"
[amap]
api_key = "k"
geocode_url = "http://localhost:8080/geo"
walking_url = "http://localhost:8080/walk"
"#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.amap.geocode_url, "http://localhost:8080/geo");
        assert_eq!(config.amap.walking_url, "http://localhost:8080/walk");
        assert_eq!(config.amap.show_fields, "cost,navi,polyline");
    }

    fn env_with(vars: &[(&str, &str)]) -> config::Environment {
        environment().source(Some(
            vars.iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        ))
    }

    #[test]
    fn digit_only_key_from_env_is_kept_verbatim() {
        let env = env_with(&[("WALKNAV_AMAP__API_KEY", "01234567890123456789012345678901")]);
        let config = AppConfig::load_with_env(None, env).unwrap();
        assert_eq!(
            config.amap.api_key_str(),
            "01234567890123456789012345678901"
        );
    }

    #[test]
    fn env_overrides_file_and_parses_timeout() {
        let file = write_config(
            r#"
[amap]
api_key = "file-key"
timeout_secs = 3
"#,
        );
        let env = env_with(&[
            ("WALKNAV_AMAP__API_KEY", "env-key"),
            ("WALKNAV_AMAP__TIMEOUT_SECS", "7"),
        ]);

        let config = AppConfig::load_with_env(Some(file.path()), env).unwrap();
        assert_eq!(config.amap.api_key_str(), "env-key");
        assert_eq!(config.amap.timeout_secs, 7);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("[amap\napi_key = ");
        assert!(AppConfig::load(Some(file.path())).is_err());
    }
}
