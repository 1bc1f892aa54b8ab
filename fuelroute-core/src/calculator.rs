//! Stateful route calculation with change notification.
//!
//! [`RouteCalculator`] keeps the origin, destination, last route and the
//! origin's proximity buffer in a `tokio::sync::watch` channel. Every change is
//! published as a complete [`RouteState`], so subscribers never see a route
//! whose fields come from different computations.
//!
//! Overlapping calls to [`RouteCalculator::compute_route`] are resolved by
//! ticket: each call draws a ticket before contacting the provider. A response
//! is only stored when no newer ticket has been accepted already and the
//! endpoints it was requested for are still the current ones.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use tokio::sync::watch;

use crate::{
    BufferRegion, Coordinate, RouteError, RouteProvider, RouteRequest, RouteResult, Step,
    buffer_region,
};

/// Everything a subscriber can observe about a calculator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteState {
    /// Route start, if chosen.
    pub origin: Option<Coordinate>,
    /// Route end, if chosen.
    pub destination: Option<Coordinate>,
    /// Last successfully computed route.
    pub route: RouteResult,
    /// Proximity buffer around `origin`.
    pub buffer: Option<BufferRegion>,
    /// Ticket of the computation that stored `route`; zero before the first
    /// success. An identical route returned later keeps the earlier ticket.
    pub revision: u64,
}

impl RouteState {
    /// The request implied by the current endpoints.
    #[must_use]
    pub const fn request(&self) -> Option<RouteRequest> {
        match (self.origin, self.destination) {
            (Some(origin), Some(destination)) => Some(RouteRequest::new(origin, destination)),
            _ => None,
        }
    }
}

/// What a call to [`RouteCalculator::try_compute_route`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeOutcome {
    /// The new route was stored.
    Applied {
        /// Ticket now recorded as the state's revision.
        revision: u64,
    },
    /// The provider returned the route that is already stored; nothing
    /// changed and subscribers were not notified.
    Unchanged {
        /// Revision of the stored route.
        revision: u64,
    },
    /// A newer computation had already been accepted, or the endpoints
    /// changed while the request was in flight; this one was discarded.
    Stale {
        /// Ticket of the discarded computation.
        ticket: u64,
    },
    /// Origin or destination was missing; nothing was requested.
    MissingEndpoints,
}

/// Route state holder driving a [`RouteProvider`].
///
/// # Examples
///
/// ```
/// use fuelroute_core::{Coordinate, RouteCalculator};
/// # use async_trait::async_trait;
/// # use fuelroute_core::{RouteError, RouteProvider, RouteRequest, RouteResult};
/// # struct Direct;
/// # #[async_trait]
/// # impl RouteProvider for Direct {
/// #     async fn route(&self, r: &RouteRequest) -> Result<RouteResult, RouteError> {
/// #         Ok(RouteResult::new(vec![r.origin, r.destination], Vec::new(), 60.0, 500.0))
/// #     }
/// # }
///
/// # tokio_test_block_on(async {
/// let calculator = RouteCalculator::new(Direct);
/// calculator.set_origin(Coordinate::new(-17.964055, -67.114579).unwrap());
/// assert!(calculator.buffer_region().is_some());
///
/// // Without a destination nothing happens.
/// calculator.compute_route().await;
/// assert!(calculator.route().is_empty());
///
/// calculator.set_destination(Coordinate::new(-17.97, -67.12).unwrap());
/// calculator.compute_route().await;
/// assert_eq!(calculator.geometry().len(), 2);
/// # });
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug)]
pub struct RouteCalculator<P> {
    provider: P,
    state: watch::Sender<RouteState>,
    tickets: AtomicU64,
    accepted: AtomicU64,
}

impl<P> RouteCalculator<P>
where
    P: RouteProvider,
{
    /// Create a calculator with no endpoints and an empty route.
    #[must_use]
    pub fn new(provider: P) -> Self {
        let (state, _) = watch::channel(RouteState::default());
        Self {
            provider,
            state,
            tickets: AtomicU64::new(0),
            accepted: AtomicU64::new(0),
        }
    }

    /// The provider used for computations.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Set the route start and rebuild the proximity buffer.
    pub fn set_origin(&self, origin: Coordinate) {
        self.state.send_if_modified(|state| {
            if state.origin == Some(origin) {
                return false;
            }
            state.origin = Some(origin);
            state.buffer = Some(buffer_region(origin));
            true
        });
    }

    /// Forget the route start and its buffer.
    pub fn clear_origin(&self) {
        self.state.send_if_modified(|state| {
            if state.origin.is_none() {
                return false;
            }
            state.origin = None;
            state.buffer = None;
            true
        });
    }

    /// Set the route end.
    pub fn set_destination(&self, destination: Coordinate) {
        self.state.send_if_modified(|state| {
            if state.destination == Some(destination) {
                return false;
            }
            state.destination = Some(destination);
            true
        });
    }

    /// Forget the route end.
    pub fn clear_destination(&self) {
        self.state.send_if_modified(|state| state.destination.take().is_some());
    }

    /// Compute the route between the current endpoints.
    ///
    /// Does nothing when either endpoint is missing. Failures are logged and
    /// leave the stored route untouched.
    pub async fn compute_route(&self) {
        if let Err(err) = self.try_compute_route().await {
            warn!("{err}");
        }
    }

    /// Compute the route and report what happened.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`RouteError`]; the stored state is unchanged in
    /// that case.
    pub async fn try_compute_route(&self) -> Result<ComputeOutcome, RouteError> {
        let request = self.state.borrow().request();
        let Some(request) = request else {
            debug!("route computation skipped: origin or destination unset");
            return Ok(ComputeOutcome::MissingEndpoints);
        };

        let ticket = self.next_ticket();
        debug!(
            "requesting route #{ticket} from {:?} to {:?}",
            request.origin.to_lat_lng(),
            request.destination.to_lat_lng()
        );
        let route = self.provider.route(&request).await?;
        let (duration_secs, distance_m) = (route.duration_secs, route.distance_m);

        let mut outcome = ComputeOutcome::Stale { ticket };
        self.state.send_if_modified(|state| {
            if ticket <= self.accepted.load(Ordering::Acquire)
                || state.request() != Some(request)
            {
                return false;
            }
            self.accepted.store(ticket, Ordering::Release);
            if state.route == route {
                outcome = ComputeOutcome::Unchanged {
                    revision: state.revision,
                };
                return false;
            }
            state.route = route;
            state.revision = ticket;
            outcome = ComputeOutcome::Applied { revision: ticket };
            true
        });

        match outcome {
            ComputeOutcome::Applied { .. } => {
                info!("route #{ticket} stored: {distance_m:.0} m, {duration_secs:.0} s");
            }
            ComputeOutcome::Unchanged { revision } => {
                debug!("route #{ticket} matches stored route #{revision}");
            }
            ComputeOutcome::Stale { .. } | ComputeOutcome::MissingEndpoints => {
                debug!("route #{ticket} discarded: superseded or endpoints changed");
            }
        }
        Ok(outcome)
    }

    fn next_ticket(&self) -> u64 {
        self.tickets.fetch_add(1, Ordering::Relaxed).saturating_add(1)
    }
}

impl<P> RouteCalculator<P> {
    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RouteState> {
        self.state.subscribe()
    }

    /// A copy of the whole current state.
    #[must_use]
    pub fn snapshot(&self) -> RouteState {
        self.state.borrow().clone()
    }

    /// Current route start.
    #[must_use]
    pub fn origin(&self) -> Option<Coordinate> {
        self.state.borrow().origin
    }

    /// Current route end.
    #[must_use]
    pub fn destination(&self) -> Option<Coordinate> {
        self.state.borrow().destination
    }

    /// Last stored route.
    #[must_use]
    pub fn route(&self) -> RouteResult {
        self.state.borrow().route.clone()
    }

    /// Geometry of the last stored route, latitude first.
    #[must_use]
    pub fn geometry(&self) -> Vec<Coordinate> {
        self.state.borrow().route.geometry.clone()
    }

    /// Steps of the last stored route.
    #[must_use]
    pub fn steps(&self) -> Vec<Step> {
        self.state.borrow().route.steps.clone()
    }

    /// Duration of the last stored route in seconds.
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.state.borrow().route.duration_secs
    }

    /// Distance of the last stored route in metres.
    #[must_use]
    pub fn distance_m(&self) -> f64 {
        self.state.borrow().route.distance_m
    }

    /// Proximity buffer around the current origin.
    #[must_use]
    pub fn buffer_region(&self) -> Option<BufferRegion> {
        self.state.borrow().buffer.clone()
    }
}
