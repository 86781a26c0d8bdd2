//! Deterministic Traveling Salesman tour engine.
//!
//! Orders a small-to-medium set of points into a short closed tour:
//!
//! - **Construction**: nearest-neighbor greedy tour from the first point.
//! - **Local search**: repeated 2-opt scans, falling back to a restricted
//!   3-opt scan, until no move shortens the tour (a local optimum).
//!
//! The search uses first-improvement acceptance with a fixed scan order
//! and strict comparisons, so the same input always produces the same
//! tour. No global-optimality guarantee is made.
//!
//! # Modules
//!
//! - [`geo`]: geographic points and haversine distance
//! - [`matrix`]: distance tables and the [`matrix::DistanceProvider`] seam
//! - [`tour`]: tour type, operators and the local search runner
//! - [`solver`]: end-to-end entry points
//!
//! # Examples
//!
//! ```
//! use u_tour::geo::GeoPoint;
//!
//! let cities = [
//!     GeoPoint::new(40.7128, -74.006),   // New York
//!     GeoPoint::new(34.0522, -118.2437), // Los Angeles
//!     GeoPoint::new(41.8781, -87.6298),  // Chicago
//!     GeoPoint::new(29.7604, -95.3698),  // Houston
//! ];
//! let tour = u_tour::solve(&cities);
//! assert_eq!(tour.len(), cities.len());
//! ```
//!
//! # Features
//!
//! - `serde`: serialization for points, tours, configs and results
//! - `parallel`: build distance matrices with rayon
//! - `wasm`: JavaScript bindings via `wasm-bindgen`

pub mod error;
pub mod geo;
pub mod matrix;
pub mod solver;
pub mod tour;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, TspError};
pub use solver::{solve, solve_with, TspSolution, TspSolver};
