//! Facade crate for the Procura evaluation engine.
//!
//! This crate re-exports the core domain types and exposes the default bid
//! scorer and route optimiser behind feature flags.

#![forbid(unsafe_code)]

pub use procura_core::{
    BidScorer, Route, RouteError, RouteOptimizer, ScoreError, ScoreInputs, ScoreWeights, Waypoint,
    haversine_km,
};

#[cfg(feature = "scorer")]
pub use procura_scorer::{BidRecord, RankError, RankedBid, WeightedBidScorer, rank_bids};

#[cfg(feature = "router")]
pub use procura_router::NearestNeighbourOptimizer;
