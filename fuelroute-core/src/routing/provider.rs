//! Routing provider trait.

use async_trait::async_trait;

use crate::{RouteRequest, RouteResult};

use super::error::RouteError;

/// Fetch a driving route for a pair of endpoints.
///
/// Implementations must return geometry in travel order with every position
/// latitude first, whatever order the underlying service uses.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use fuelroute_core::{RouteError, RouteProvider, RouteRequest, RouteResult};
///
/// struct StraightLine;
///
/// #[async_trait]
/// impl RouteProvider for StraightLine {
///     async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
///         let geometry = vec![request.origin, request.destination];
///         let distance = request.origin.distance_to(&request.destination);
///         Ok(RouteResult::new(geometry, Vec::new(), 0.0, distance))
///     }
/// }
/// ```
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Return the route from `request.origin` to `request.destination`.
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError>;
}

#[async_trait]
impl<P> RouteProvider for std::sync::Arc<P>
where
    P: RouteProvider + ?Sized,
{
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        (**self).route(request).await
    }
}

#[async_trait]
impl<P> RouteProvider for Box<P>
where
    P: RouteProvider + ?Sized,
{
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        (**self).route(request).await
    }
}
