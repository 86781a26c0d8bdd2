//! Error types for tour construction and distance validation.
//!
//! The default solve path never fails. These errors surface only from
//! the checked entry points ([`crate::solver::TspSolver::try_solve`],
//! [`crate::matrix::DistanceMatrix::from_rows`],
//! [`crate::matrix::DistanceMatrix::validate`] and `Tour::try_from`).

use thiserror::Error;

/// Main error type for `u-tour` operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A row of a distance table has the wrong number of entries.
    #[error("distance matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The distance provider returned a matrix of the wrong size.
    #[error("distance matrix covers {matrix} cities but {points} points were given")]
    DimensionMismatch { matrix: usize, points: usize },

    /// A distance is NaN, infinite or negative.
    #[error("invalid distance {value} between cities {from} and {to}")]
    InvalidDistance { from: usize, to: usize, value: f64 },

    /// A city is at non-zero distance from itself.
    #[error("non-zero self distance {value} at city {city}")]
    NonZeroDiagonal { city: usize, value: f64 },

    /// `d(a, b) != d(b, a)`.
    #[error("asymmetric distance between cities {a} and {b}: {forward} vs {backward}")]
    Asymmetric {
        a: usize,
        b: usize,
        forward: f64,
        backward: f64,
    },

    /// A city sequence is not a permutation of `0..len`.
    #[error("sequence of length {len} is not a permutation of 0..{len}")]
    NotAPermutation { len: usize },
}

/// Result type alias for `u-tour` operations.
pub type Result<T> = std::result::Result<T, TspError>;
