//! AMap navigation client
//!
//! Resolves addresses through the geocoding endpoint and retrieves walking
//! routes through the v5 directions endpoint. Every request carries the
//! configured key as a query parameter.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Address, Coordinate};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::AmapConfig;
use crate::error::NavigationError;
use crate::models::{GeocodeResponse, WalkingRouteResponse};

/// Trait for navigation service clients
#[async_trait]
pub trait NavigationClient: Send + Sync {
    /// Resolve a free-form address to the coordinate text of its best match
    async fn geocode(&self, address: &Address) -> Result<Coordinate, NavigationError>;

    /// Fetch walking directions between two coordinates
    ///
    /// On success the full decoded response is returned unchanged.
    async fn fetch_walking_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<WalkingRouteResponse, NavigationError>;
}

/// Which endpoint a transport failure belongs to
#[derive(Debug, Clone, Copy)]
enum Endpoint<'a> {
    Geocode(&'a Address),
    Walking,
}

impl Endpoint<'_> {
    fn exception(self, reason: String) -> NavigationError {
        match self {
            Self::Geocode(address) => NavigationError::GeocodingException {
                address: address.to_string(),
                reason,
            },
            Self::Walking => NavigationError::RouteFetchException { reason },
        }
    }
}

/// AMap web service client
#[derive(Debug)]
pub struct AmapNavigationClient {
    client: Client,
    config: AmapConfig,
}

impl AmapNavigationClient {
    /// Create a new AMap client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &AmapConfig) -> Result<Self, NavigationError> {
        config.validate().map_err(NavigationError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("WalkNav/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NavigationError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Issue a GET and return the body text of a 2xx response
    async fn get_text(
        &self,
        url: &str,
        params: &[(&str, &str)],
        endpoint: Endpoint<'_>,
    ) -> Result<String, NavigationError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("request timed out after {} seconds", self.config.timeout_secs)
                } else {
                    e.to_string()
                };
                warn!(%url, %reason, "Request to navigation service failed");
                endpoint.exception(reason)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Navigation service returned HTTP error");
            return Err(endpoint.exception(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| endpoint.exception(e.to_string()))
    }
}

#[async_trait]
impl NavigationClient for AmapNavigationClient {
    #[instrument(skip(self, address), fields(address = %address))]
    async fn geocode(&self, address: &Address) -> Result<Coordinate, NavigationError> {
        let params = [
            ("key", self.config.api_key_str()),
            ("address", address.as_str()),
        ];

        debug!(url = %self.config.geocode_url, "Geocoding address");

        let body = self
            .get_text(&self.config.geocode_url, &params, Endpoint::Geocode(address))
            .await?;

        let parsed: GeocodeResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, %body, "Unparseable geocoding response");
            Endpoint::Geocode(address).exception(e.to_string())
        })?;

        if !parsed.is_success() {
            warn!(info = %parsed.reason(), %body, "Geocoding failed");
            return Err(NavigationError::GeocodingFailed {
                address: address.to_string(),
                info: parsed.reason(),
                body,
            });
        }

        let Some(location) = parsed.first_location() else {
            warn!(%body, "Geocoding succeeded without a usable location");
            return Err(NavigationError::GeocodingFailed {
                address: address.to_string(),
                info: "no location in response".to_string(),
                body,
            });
        };

        let coordinate =
            Coordinate::new(location).map_err(|e| NavigationError::GeocodingFailed {
                address: address.to_string(),
                info: e.to_string(),
                body: body.clone(),
            })?;

        debug!(%coordinate, "Geocoded address");
        Ok(coordinate)
    }

    #[instrument(skip(self, origin, destination), fields(origin = %origin, destination = %destination))]
    async fn fetch_walking_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<WalkingRouteResponse, NavigationError> {
        let params = [
            ("key", self.config.api_key_str()),
            ("origin", origin.as_str()),
            ("destination", destination.as_str()),
            ("show_fields", self.config.show_fields.as_str()),
        ];

        debug!(url = %self.config.walking_url, "Fetching walking route");

        let body = self
            .get_text(&self.config.walking_url, &params, Endpoint::Walking)
            .await?;

        let parsed: WalkingRouteResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, %body, "Unparseable walking route response");
            Endpoint::Walking.exception(e.to_string())
        })?;

        if !parsed.is_success() {
            warn!(info = %parsed.reason(), %body, "Walking route fetch failed");
            return Err(NavigationError::RouteFetchFailed {
                info: parsed.reason(),
                body,
            });
        }

        debug!(
            paths = parsed.route.as_ref().map_or(0, |r| r.paths.len()),
            "Walking route received"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[test]
    fn test_new_rejects_missing_key() {
        let err = AmapNavigationClient::new(&AmapConfig::default()).unwrap_err();
        assert_eq!(err.kind(), FailureKind::Configuration);
    }

    #[test]
    fn test_new_accepts_valid_config() {
        let config = AmapConfig::with_api_key("abc");
        assert!(AmapNavigationClient::new(&config).is_ok());
    }

    #[test]
    fn test_debug_output_hides_key() {
        let config = AmapConfig::with_api_key("very-secret-key");
        let client = AmapNavigationClient::new(&config).unwrap();
        assert!(!format!("{client:?}").contains("very-secret-key"));
    }

    #[test]
    fn test_endpoint_exception_mapping() {
        let address = Address::new("A").unwrap();
        let err = Endpoint::Geocode(&address).exception("boom".to_string());
        assert_eq!(err.kind(), FailureKind::GeocodingException);
        assert!(err.to_string().contains('A'));

        let err = Endpoint::Walking.exception("boom".to_string());
        assert_eq!(err.kind(), FailureKind::RouteFetchException);
    }
}
