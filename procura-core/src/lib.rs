//! Core domain types for the Procura evaluation engine.
//!
//! The crate defines the value types consumed by bid scoring and route
//! planning, the haversine metric, and the [`BidScorer`] and
//! [`RouteOptimizer`] traits that concrete implementations plug into.
//! Everything here is pure: no I/O, no shared state.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bid;
pub mod geodesy;
pub mod optimizer;
pub mod route;
pub mod waypoint;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use bid::{BidScorer, ScoreError, ScoreInputs, ScoreWeights};
pub use geodesy::{EARTH_RADIUS_KM, haversine_km};
pub use optimizer::{RouteError, RouteOptimizer, validate_waypoints};
pub use route::Route;
pub use waypoint::Waypoint;
