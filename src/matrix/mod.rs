//! Pairwise distance tables and the providers that build them.
//!
//! A [`DistanceMatrix`] is built once per solve and never mutated. The
//! search only reads it; how distances are produced is left to a
//! [`DistanceProvider`]. Two providers ship with the crate:
//!
//! - [`Haversine`]: great-circle kilometres between [`GeoPoint`]s
//! - [`DistanceFn`]: any symmetric closure over caller-defined points
//!
//! [`GeoPoint`]: crate::geo::GeoPoint

mod provider;
mod types;

pub use provider::{DistanceFn, DistanceProvider, Haversine};
pub use types::DistanceMatrix;
