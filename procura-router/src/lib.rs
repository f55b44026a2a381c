//! Greedy route planning for Procura transport requests.
//!
//! This crate provides [`NearestNeighbourOptimizer`], the default
//! implementation of the [`RouteOptimizer`](procura_core::RouteOptimizer)
//! trait. Starting from the first stop supplied, it repeatedly travels to the
//! closest unvisited stop by haversine distance until every stop is placed.
//!
//! The heuristic is not globally optimal and runs in O(n²) time, which suits
//! the tens of stops a transporter handles in one pickup run. Ties go to the
//! stop supplied first, so results depend on input order.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod optimizer;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use optimizer::{NearestNeighbourOptimizer, optimize};
