//! Deterministic `RouteProvider` doubles for unit and behaviour tests.
//!
//! [`StubRouteProvider`] answers every request with one configured response
//! and records what it was asked. [`GatedRouteProvider`] plays back a script of
//! responses, some of which wait for a signal, so tests can force responses to
//! arrive out of order.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::oneshot;

use crate::{Coordinate, RouteError, RouteProvider, RouteRequest, RouteResult};

/// A two-point route between the default map centre and a nearby point.
#[must_use]
pub fn sample_route() -> RouteResult {
    RouteResult::new(
        vec![
            Coordinate::from_degrees_unchecked(-17.964055, -67.114579),
            Coordinate::from_degrees_unchecked(-17.98, -67.13),
        ],
        vec![json!({
            "name": "Avenida 6 de Octubre",
            "maneuver": { "type": "depart" },
            "distance": 2_450.0,
            "duration": 312.0,
        })],
        312.0,
        2_450.0,
    )
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Provider returning a fixed response.
///
/// Clones share their response and call log, so a test can keep a handle
/// after moving the provider into a calculator.
#[derive(Debug, Clone)]
pub struct StubRouteProvider {
    response: Arc<Mutex<Result<RouteResult, RouteError>>>,
    requests: Arc<Mutex<Vec<RouteRequest>>>,
    calls: Arc<AtomicUsize>,
}

impl StubRouteProvider {
    fn with_response(response: Result<RouteResult, RouteError>) -> Self {
        Self {
            response: Arc::new(Mutex::new(response)),
            requests: Arc::default(),
            calls: Arc::default(),
        }
    }

    /// Create a provider that returns `route` for every request.
    #[must_use]
    pub fn with_route(route: RouteResult) -> Self {
        Self::with_response(Ok(route))
    }

    /// Create a provider that fails every request with `error`.
    #[must_use]
    pub fn with_error(error: RouteError) -> Self {
        Self::with_response(Err(error))
    }

    /// Answer subsequent requests with `route`.
    pub fn respond_with_route(&self, route: RouteResult) {
        *lock(&self.response) = Ok(route);
    }

    /// Fail subsequent requests with `error`.
    pub fn respond_with_error(&self, error: RouteError) {
        *lock(&self.response) = Err(error);
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<RouteRequest> {
        lock(&self.requests).last().copied()
    }
}

#[async_trait]
impl RouteProvider for StubRouteProvider {
    async fn route(&self, request: &RouteRequest) -> Result<RouteResult, RouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        lock(&self.requests).push(*request);
        lock(&self.response).clone()
    }
}

#[derive(Debug)]
enum Scripted {
    Ready(RouteResult),
    Gated(RouteResult, oneshot::Receiver<()>),
}

/// Provider that plays back scripted responses in call order.
///
/// Gated responses are held until the matching sender fires (or is dropped).
/// Once the script is exhausted every call fails with [`RouteError::NoRoute`].
#[derive(Debug, Default)]
pub struct GatedRouteProvider {
    script: Mutex<VecDeque<Scripted>>,
}

impl GatedRouteProvider {
    /// Create a provider with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a response returned immediately.
    pub fn push_ready(&self, route: RouteResult) {
        lock(&self.script).push_back(Scripted::Ready(route));
    }

    /// Append a response held until the returned sender fires.
    #[must_use = "dropping the sender releases the response immediately"]
    pub fn push_gated(&self, route: RouteResult) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        lock(&self.script).push_back(Scripted::Gated(route, gate));
        release
    }
}

#[async_trait]
impl RouteProvider for GatedRouteProvider {
    async fn route(&self, _request: &RouteRequest) -> Result<RouteResult, RouteError> {
        let next = lock(&self.script).pop_front();
        match next {
            Some(Scripted::Ready(route)) => Ok(route),
            Some(Scripted::Gated(route, gate)) => {
                // A dropped sender counts as a release.
                let _released = gate.await;
                Ok(route)
            }
            None => Err(RouteError::NoRoute),
        }
    }
}
