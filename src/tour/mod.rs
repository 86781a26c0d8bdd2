//! Tour construction and local search.
//!
//! A tour is built greedily with [`nearest_neighbor`] and then refined by
//! [`LocalSearchRunner`], which alternates full 2-opt scans with a
//! restricted 3-opt scan until neither shortens the tour. The search is
//! deterministic: the same matrix always yields the same tour.
//!
//! # References
//!
//! - Croes, G. A. (1958). "A Method for Solving Traveling-Salesman Problems",
//!   *Operations Research* 6(6), 791-812.
//! - Lin, S. (1965). "Computer Solutions of the Traveling Salesman Problem",
//!   *Bell System Technical Journal* 44(10), 2245-2269.

mod config;
mod operators;
mod runner;
mod types;

pub use config::LocalSearchConfig;
pub use operators::{nearest_neighbor, reverse_segment, tour_length, ThreeOptMove};
pub use runner::{LocalSearchResult, LocalSearchRunner};
pub use types::{is_permutation, Tour};
