//! Data access for the fuel-station finder.
//!
//! Responsibilities:
//! - Provide adapters for external HTTP routing services.
//! - Encapsulate the services' wire formats.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `fuelroute-core`).
//! - Keep blocking I/O off async executors; use async-capable clients.
//!
//! Invariants:
//! - Positions leave this crate latitude first.
//! - No global mutable state.
#![forbid(unsafe_code)]

pub mod routing;
