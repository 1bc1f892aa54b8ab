//! HTTP-based `RouteProvider` using OSRM's Route API.
//!
//! This module provides [`HttpRouteProvider`], an implementation of the
//! [`RouteProvider`] trait that fetches driving routes from an OSRM routing
//! service via HTTP.
//!
//! # Example
//!
//! ```no_run
//! use fuelroute_core::{Coordinate, RouteProvider, RouteRequest};
//! use fuelroute_data::routing::HttpRouteProvider;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = HttpRouteProvider::new("http://localhost:5000")?;
//! let request = RouteRequest::new(
//!     Coordinate::new(-17.964055, -67.114579)?,
//!     Coordinate::new(-18.0, -67.2)?,
//! );
//!
//! let route = provider.route(&request).await?;
//! # let _ = route;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use fuelroute_core::{Coordinate, RouteError, RouteProvider, RouteRequest, RouteResult};
use log::debug;
use reqwest::Client;

use super::osrm::RouteResponse;

/// Error type for [`HttpRouteProvider`] construction failures.
#[derive(Debug)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
}

impl std::fmt::Display for ProviderBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
        }
    }
}

impl std::error::Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
        }
    }
}

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "fuelroute/0.1";

/// Default OSRM routing profile.
pub const DEFAULT_PROFILE: &str = "driving";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpRouteProvider`].
#[derive(Debug, Clone)]
pub struct HttpRouteProviderConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Routing profile placed in the request path.
    pub profile: String,
}

impl Default for HttpRouteProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
        }
    }
}

impl HttpRouteProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the routing profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }
}

/// HTTP-based route provider using the OSRM Route API.
///
/// Requests the full-overview GeoJSON geometry with steps and returns the
/// first route, its geometry transposed to latitude-first order.
#[derive(Debug, Clone)]
pub struct HttpRouteProvider {
    client: Client,
    config: HttpRouteProviderConfig,
}

impl HttpRouteProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for the OSRM service (e.g., `"http://localhost:5000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpRouteProviderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: HttpRouteProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        Ok(Self { client, config })
    }

    /// The configuration the provider was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpRouteProviderConfig {
        &self.config
    }

    /// Build the OSRM Route API URL for the given request.
    ///
    /// The URL format is:
    /// `{base_url}/route/v1/{profile}/{lng1},{lat1};{lng2},{lat2}?overview=full&geometries=geojson&steps=true`.
    fn build_route_url(&self, request: &RouteRequest) -> String {
        let [origin_lng, origin_lat] = request.origin.to_lng_lat();
        let [destination_lng, destination_lat] = request.destination.to_lng_lat();

        format!(
            "{}/route/v1/{}/{origin_lng},{origin_lat};{destination_lng},{destination_lat}\
             ?overview=full&geometries=geojson&steps=true",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
        )
    }

    /// Convert a reqwest error to a `RouteError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> RouteError {
        if error.is_timeout() {
            return RouteError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return RouteError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        RouteError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl RouteProvider for HttpRouteProvider {
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        let url = self.build_route_url(request);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let route_response: RouteResponse =
            response
                .json()
                .await
                .map_err(|err| RouteError::ParseError {
                    message: err.to_string(),
                })?;

        convert_response(route_response)
    }
}

/// Convert an OSRM response to a `RouteResult`.
///
/// Only the first route and its first leg are used.
fn convert_response(response: RouteResponse) -> Result<RouteResult, RouteError> {
    if !response.is_ok() {
        return Err(RouteError::ServiceError {
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or(RouteError::NoRoute)?;

    let steps = route
        .legs
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::ParseError {
            message: "OSRM route has no legs".to_owned(),
        })?
        .steps;

    let geometry = route
        .geometry
        .coordinates
        .into_iter()
        .map(|pair| {
            Coordinate::from_lng_lat(pair).map_err(|err| RouteError::ParseError {
                message: format!("OSRM geometry position {pair:?} is invalid: {err}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let duration_secs = non_negative("duration", route.duration)?;
    let distance_m = non_negative("distance", route.distance)?;

    Ok(RouteResult::new(geometry, steps, duration_secs, distance_m))
}

fn non_negative(field: &str, value: f64) -> Result<f64, RouteError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RouteError::ParseError {
            message: format!("OSRM route {field} {value} is not a non-negative number"),
        })
    }
}
