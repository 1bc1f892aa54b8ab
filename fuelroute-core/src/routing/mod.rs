//! Obtain driving routes between two coordinates.
//!
//! The `RouteProvider` trait abstracts the routing service. Callers hand over a
//! [`RouteRequest`](crate::RouteRequest) and receive a
//! [`RouteResult`](crate::RouteResult) whose geometry is already in
//! `(lat, lng)` order.
//!
//! Every failure is reported as a [`RouteError`]; its variants only carry
//! diagnostic detail.

mod error;
mod provider;

pub use error::RouteError;
pub use provider::RouteProvider;
