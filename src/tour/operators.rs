//! Tour evaluation, construction and edge-exchange operators.
//!
//! # Construction
//!
//! - [`nearest_neighbor`]: greedy tour from city 0 — O(n²)
//!
//! # Moves
//!
//! - [`reverse_segment`]: the 2-opt move, reverses positions `i+1..=k` — O(n)
//! - [`ThreeOptMove`]: three fixed reconnections of a tour cut at `i < j < k` — O(n)
//!
//! All moves return a new [`Tour`]; the input is never modified.
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"
//! - Lin (1965), "Computer Solutions of the Traveling Salesman Problem"

use super::types::Tour;
use crate::matrix::DistanceMatrix;

// ============================================================================
// Evaluation
// ============================================================================

/// Cyclic length of a visiting order.
///
/// Sums `d(t[i], t[(i + 1) % n])` for `i` in `0..n`, left to right. The
/// summation order is fixed so that equal tours always compare equal.
///
/// # Examples
///
/// ```
/// use u_tour::matrix::DistanceMatrix;
/// use u_tour::tour::tour_length;
///
/// let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
/// assert_eq!(tour_length(&[0, 1, 2], &m), 12.0);
/// ```
pub fn tour_length(order: &[usize], matrix: &DistanceMatrix) -> f64 {
    let n = order.len();
    let mut total = 0.0;
    for i in 0..n {
        total += matrix.get(order[i], order[(i + 1) % n]);
    }
    total
}

// ============================================================================
// Construction
// ============================================================================

/// Nearest-neighbor tour starting at city 0.
///
/// From the last city placed, scans unvisited cities in index order and
/// takes the one at strictly smallest distance, so the lowest index wins
/// ties. If no remaining distance compares below infinity (all NaN), the
/// first unvisited city is taken.
///
/// # Complexity
/// O(n²) time, O(n) space
pub fn nearest_neighbor(matrix: &DistanceMatrix) -> Tour {
    let n = matrix.len();
    if n == 0 {
        return Tour::identity(0);
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    order.push(0);
    visited[0] = true;

    for _ in 1..n {
        let last = order[order.len() - 1];
        let row = matrix.row(last);

        let mut nearest = None;
        let mut min_distance = f64::INFINITY;
        for (city, &d) in row.iter().enumerate() {
            if !visited[city] && d < min_distance {
                min_distance = d;
                nearest = Some(city);
            }
        }

        let next = nearest
            .or_else(|| visited.iter().position(|&v| !v))
            .unwrap_or(last);
        order.push(next);
        visited[next] = true;
    }

    Tour::from_order(order)
}

// ============================================================================
// Moves
// ============================================================================

/// 2-opt move: reverses the cities at positions `i+1..=k`.
///
/// Replaces edges `(t[i], t[i+1])` and `(t[k], t[k+1 mod n])` with
/// `(t[i], t[k])` and `(t[i+1], t[k+1 mod n])`.
///
/// # Panics
/// Panics unless `i < k < tour.len()`.
///
/// # Examples
///
/// ```
/// use u_tour::tour::{reverse_segment, Tour};
///
/// let tour = Tour::identity(5);
/// let moved = reverse_segment(&tour, 1, 3);
/// assert_eq!(moved.as_slice(), &[0, 1, 3, 2, 4]);
/// assert_eq!(tour, Tour::identity(5));
/// ```
pub fn reverse_segment(tour: &Tour, i: usize, k: usize) -> Tour {
    assert!(i < k, "segment start must precede its end");
    assert!(k < tour.len(), "segment end out of range");

    let mut order = tour.as_slice().to_vec();
    order[i + 1..=k].reverse();
    Tour::from_order(order)
}

/// The three 3-opt reconnections considered by the local search.
///
/// Cutting a tour after positions `i < j < k` gives four segments
/// `S0 = [0..=i]`, `S1 = [i+1..=j]`, `S2 = [j+1..=k]`, `S3 = [k+1..n)`.
/// Only these three reconnections are tried, in [`ThreeOptMove::ALL`]
/// order; the other 3-opt reconnection types are not part of the
/// neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreeOptMove {
    /// `S0 + rev(S1) + S2 + S3`
    ReverseFirst,
    /// `S0 + S1 + rev(S2) + S3`
    ReverseSecond,
    /// `S0 + S2 + S1 + S3`
    SwapSegments,
}

impl ThreeOptMove {
    /// Evaluation order used by the local search.
    pub const ALL: [ThreeOptMove; 3] = [
        ThreeOptMove::ReverseFirst,
        ThreeOptMove::ReverseSecond,
        ThreeOptMove::SwapSegments,
    ];

    /// Builds the reconnected tour for cut points `i < j < k`.
    ///
    /// # Panics
    /// Panics unless `i < j < k < tour.len()`.
    pub fn apply(self, tour: &Tour, i: usize, j: usize, k: usize) -> Tour {
        let t = tour.as_slice();
        assert!(i < j && j < k, "cut points must be strictly increasing");
        assert!(k < t.len(), "cut point out of range");

        let (s0, s1, s2, s3) = (&t[..=i], &t[i + 1..=j], &t[j + 1..=k], &t[k + 1..]);

        let mut order = Vec::with_capacity(t.len());
        order.extend_from_slice(s0);
        match self {
            ThreeOptMove::ReverseFirst => {
                order.extend(s1.iter().rev());
                order.extend_from_slice(s2);
            }
            ThreeOptMove::ReverseSecond => {
                order.extend_from_slice(s1);
                order.extend(s2.iter().rev());
            }
            ThreeOptMove::SwapSegments => {
                order.extend_from_slice(s2);
                order.extend_from_slice(s1);
            }
        }
        order.extend_from_slice(s3);

        Tour::from_order(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(xs: &[f64]) -> DistanceMatrix {
        DistanceMatrix::from_fn(xs.len(), |a, b| (xs[a] - xs[b]).abs())
    }

    // ---- tour_length ----

    #[test]
    fn test_tour_length_unit_square() {
        let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(tour_length(&[0, 1, 2, 3], &m), 4.0);

        let crossed = tour_length(&[0, 2, 1, 3], &m);
        assert!((crossed - (2.0 + 2.0 * 2f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_tour_length_degenerate() {
        let m = line(&[5.0]);
        assert_eq!(tour_length(&[], &m), 0.0);
        assert_eq!(tour_length(&[0], &m), 0.0);
    }

    #[test]
    fn test_tour_length_two_cities_counts_both_directions() {
        let m = line(&[0.0, 2.5]);
        assert_eq!(tour_length(&[0, 1], &m), 5.0);
    }

    // ---- nearest_neighbor ----

    #[test]
    fn test_nearest_neighbor_greedy_order() {
        // from 0: city 2 (1.0); from 2: city 3 (4.0) beats city 1 (9.0)
        let m = line(&[0.0, 10.0, 1.0, 5.0]);
        assert_eq!(nearest_neighbor(&m).as_slice(), &[0, 2, 3, 1]);
    }

    #[test]
    fn test_nearest_neighbor_lowest_index_wins_ties() {
        let m = line(&[0.0, 1.0, -1.0]);
        assert_eq!(nearest_neighbor(&m).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_nearest_neighbor_always_starts_at_zero() {
        let m = line(&[100.0, 0.0, 1.0, 2.0]);
        let tour = nearest_neighbor(&m);
        assert_eq!(tour.as_slice()[0], 0);
        assert_eq!(tour.as_slice(), &[0, 3, 2, 1]);
    }

    #[test]
    fn test_nearest_neighbor_duplicate_points() {
        let m = line(&[3.0, 3.0, 7.0]);
        assert_eq!(nearest_neighbor(&m).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_nearest_neighbor_nan_still_permutation() {
        let nan = f64::NAN;
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, nan, nan],
            vec![nan, 0.0, nan],
            vec![nan, nan, 0.0],
        ])
        .unwrap();
        assert_eq!(nearest_neighbor(&m).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_nearest_neighbor_trivial_sizes() {
        assert!(nearest_neighbor(&line(&[])).is_empty());
        assert_eq!(nearest_neighbor(&line(&[4.0])).as_slice(), &[0]);
    }

    // ---- reverse_segment ----

    #[test]
    fn test_reverse_segment_leaves_input_untouched() {
        let tour = Tour::try_from(vec![4, 2, 0, 3, 1]).unwrap();
        let moved = reverse_segment(&tour, 0, 4);
        assert_eq!(moved.as_slice(), &[4, 1, 3, 0, 2]);
        assert_eq!(tour.as_slice(), &[4, 2, 0, 3, 1]);
    }

    #[test]
    fn test_reverse_segment_adjacent_is_identity() {
        let tour = Tour::identity(4);
        assert_eq!(reverse_segment(&tour, 1, 2), tour);
    }

    #[test]
    #[should_panic(expected = "segment start must precede its end")]
    fn test_reverse_segment_rejects_empty_range() {
        reverse_segment(&Tour::identity(4), 2, 2);
    }

    #[test]
    #[should_panic(expected = "segment end out of range")]
    fn test_reverse_segment_rejects_out_of_range() {
        reverse_segment(&Tour::identity(4), 1, 4);
    }

    // ---- ThreeOptMove ----

    #[test]
    fn test_three_opt_reconnections() {
        let tour = Tour::identity(8);
        // S0=[0,1] S1=[2,3] S2=[4,5] S3=[6,7]
        assert_eq!(
            ThreeOptMove::ReverseFirst.apply(&tour, 1, 3, 5).as_slice(),
            &[0, 1, 3, 2, 4, 5, 6, 7]
        );
        assert_eq!(
            ThreeOptMove::ReverseSecond.apply(&tour, 1, 3, 5).as_slice(),
            &[0, 1, 2, 3, 5, 4, 6, 7]
        );
        assert_eq!(
            ThreeOptMove::SwapSegments.apply(&tour, 1, 3, 5).as_slice(),
            &[0, 1, 4, 5, 2, 3, 6, 7]
        );
    }

    #[test]
    fn test_three_opt_empty_tail_segment() {
        let tour = Tour::identity(6);
        assert_eq!(
            ThreeOptMove::SwapSegments.apply(&tour, 0, 2, 5).as_slice(),
            &[0, 3, 4, 5, 1, 2]
        );
    }

    #[test]
    fn test_three_opt_order() {
        assert_eq!(
            ThreeOptMove::ALL,
            [
                ThreeOptMove::ReverseFirst,
                ThreeOptMove::ReverseSecond,
                ThreeOptMove::SwapSegments
            ]
        );
    }

    #[test]
    #[should_panic(expected = "cut points must be strictly increasing")]
    fn test_three_opt_rejects_unordered_cuts() {
        ThreeOptMove::ReverseFirst.apply(&Tour::identity(5), 2, 1, 3);
    }
}
