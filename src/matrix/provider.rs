//! Distance providers: the seam between point data and the tour engine.

use super::types::DistanceMatrix;
use crate::geo::{haversine_km, GeoPoint};

/// Produces the n×n distance table for a sequence of points.
///
/// Implementations must return a matrix of size `points.len()` with
/// `d(a, a) == 0` and `d(a, b) == d(b, a)`. Invalid coordinates are the
/// provider's responsibility; the engine compares whatever it is given.
pub trait DistanceProvider<P> {
    /// Builds the distance table for `points`, indexed by input position.
    fn distance_matrix(&self, points: &[P]) -> DistanceMatrix;
}

/// Great-circle distance in kilometres between [`GeoPoint`]s.
///
/// With the `parallel` feature the matrix rows are computed with rayon;
/// the values are the same either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceProvider<GeoPoint> for Haversine {
    fn distance_matrix(&self, points: &[GeoPoint]) -> DistanceMatrix {
        let pairwise = |a: usize, b: usize| haversine_km(&points[a], &points[b]);

        #[cfg(feature = "parallel")]
        {
            DistanceMatrix::from_fn_par(points.len(), pairwise)
        }
        #[cfg(not(feature = "parallel"))]
        {
            DistanceMatrix::from_fn(points.len(), pairwise)
        }
    }
}

/// Adapts a pairwise distance function into a provider.
///
/// The function is evaluated for `a < b` only and mirrored, so the
/// resulting matrix is symmetric with a zero diagonal by construction.
///
/// # Examples
///
/// ```
/// use u_tour::matrix::{DistanceFn, DistanceProvider};
///
/// let manhattan = DistanceFn(|a: &(i32, i32), b: &(i32, i32)| {
///     ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
/// });
/// let m = manhattan.distance_matrix(&[(0, 0), (2, 3)]);
/// assert_eq!(m.get(1, 0), 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DistanceFn<F>(pub F);

impl<P, F> DistanceProvider<P> for DistanceFn<F>
where
    F: Fn(&P, &P) -> f64,
{
    fn distance_matrix(&self, points: &[P]) -> DistanceMatrix {
        DistanceMatrix::from_fn(points.len(), |a, b| (self.0)(&points[a], &points[b]))
    }
}
