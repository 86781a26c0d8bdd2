//! End-to-end solve: points in, visiting order out.
//!
//! Handles the trivial sizes, asks the [`DistanceProvider`] for the
//! matrix, builds the nearest-neighbor tour, refines it with
//! [`LocalSearchRunner`] and maps the city indices back onto the caller's
//! points.

use tracing::info;

use crate::error::{Result, TspError};
use crate::geo::GeoPoint;
use crate::matrix::{DistanceMatrix, DistanceProvider, Haversine};
use crate::tour::{
    nearest_neighbor, LocalSearchConfig, LocalSearchResult, LocalSearchRunner, Tour,
};

/// Outcome of [`TspSolver::try_solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct TspSolution<P> {
    /// The input points in visiting order.
    pub points: Vec<P>,
    /// The same order as city indices into the input.
    pub tour: Tour,
    /// Search statistics; `None` when the input had fewer than three
    /// points and no search was run.
    pub search: Option<LocalSearchResult>,
}

impl<P: Clone> TspSolution<P> {
    fn unchanged(points: &[P]) -> Self {
        Self {
            points: points.to_vec(),
            tour: Tour::identity(points.len()),
            search: None,
        }
    }
}

/// Nearest-neighbor construction followed by 2-opt / 3-opt local search.
///
/// # Examples
///
/// ```
/// use u_tour::geo::GeoPoint;
/// use u_tour::matrix::Haversine;
/// use u_tour::solver::TspSolver;
/// use u_tour::tour::LocalSearchConfig;
///
/// let points = [
///     GeoPoint::new(40.7128, -74.006),
///     GeoPoint::new(34.0522, -118.2437),
///     GeoPoint::new(41.8781, -87.6298),
/// ];
/// let solver = TspSolver::new(LocalSearchConfig::default().with_validate_distances(true));
/// let solution = solver.try_solve(&points, &Haversine).unwrap();
/// assert_eq!(solution.points.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TspSolver {
    config: LocalSearchConfig,
}

impl TspSolver {
    pub fn new(config: LocalSearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    /// Orders `points` into a short closed tour.
    ///
    /// Inputs of zero, one or two points are returned unchanged without
    /// consulting the provider. Never fails: distances are compared as
    /// given, so NaN distances leave the nearest-neighbor tour as is.
    /// `validate_distances` is not consulted here; use
    /// [`try_solve`](Self::try_solve) for checked input.
    ///
    /// # Panics
    /// Panics if the provider returns a matrix whose size differs from
    /// `points.len()`.
    pub fn solve<P, D>(&self, points: &[P], provider: &D) -> Vec<P>
    where
        P: Clone,
        D: DistanceProvider<P>,
    {
        if points.len() <= 2 {
            return points.to_vec();
        }

        let matrix = provider.distance_matrix(points);
        assert_eq!(
            matrix.len(),
            points.len(),
            "distance provider returned a matrix of the wrong size"
        );
        self.optimize(points, &matrix).points
    }

    /// Checked variant of [`solve`](Self::solve).
    ///
    /// Fails with [`TspError::DimensionMismatch`] if the provider returns a
    /// matrix of the wrong size, and, when `validate_distances` is set,
    /// with the first contract violation reported by
    /// [`DistanceMatrix::validate`].
    pub fn try_solve<P, D>(&self, points: &[P], provider: &D) -> Result<TspSolution<P>>
    where
        P: Clone,
        D: DistanceProvider<P>,
    {
        if points.len() <= 2 {
            return Ok(TspSolution::unchanged(points));
        }

        let matrix = provider.distance_matrix(points);
        if matrix.len() != points.len() {
            return Err(TspError::DimensionMismatch {
                matrix: matrix.len(),
                points: points.len(),
            });
        }
        if self.config.validate_distances {
            matrix.validate()?;
        }

        Ok(self.optimize(points, &matrix))
    }

    fn optimize<P: Clone>(&self, points: &[P], matrix: &DistanceMatrix) -> TspSolution<P> {
        let cities = points.len();
        info!(
            event = "solve_start",
            cities,
            three_opt = self.config.three_opt,
            max_rounds = self.config.max_rounds,
        );

        let initial = nearest_neighbor(matrix);
        let search = LocalSearchRunner::run(initial, matrix, &self.config);

        info!(
            event = "solve_end",
            cities,
            rounds = search.rounds,
            two_opt_moves = search.two_opt_moves,
            three_opt_moves = search.three_opt_moves,
            initial_length = search.initial_length,
            length = search.length,
            converged = search.converged,
        );

        let ordered = search
            .tour
            .as_slice()
            .iter()
            .map(|&city| points[city].clone())
            .collect();

        TspSolution {
            points: ordered,
            tour: search.tour.clone(),
            search: Some(search),
        }
    }
}

/// Orders geographic points by great-circle distance.
///
/// Shorthand for [`solve_with`] using the [`Haversine`] provider and the
/// default configuration.
///
/// # Examples
///
/// ```
/// use u_tour::geo::GeoPoint;
/// use u_tour::solver::solve;
///
/// assert!(solve(&[]).is_empty());
///
/// let one = [GeoPoint::new(0.0, 0.0)];
/// assert_eq!(solve(&one), one.to_vec());
/// ```
pub fn solve(points: &[GeoPoint]) -> Vec<GeoPoint> {
    solve_with(points, &Haversine)
}

/// Orders arbitrary points with a caller-supplied distance provider and
/// the default configuration.
pub fn solve_with<P, D>(points: &[P], provider: &D) -> Vec<P>
where
    P: Clone,
    D: DistanceProvider<P>,
{
    TspSolver::default().solve(points, provider)
}
