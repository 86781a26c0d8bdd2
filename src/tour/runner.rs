//! Local search execution engine.
//!
//! # Algorithm
//!
//! 1. Evaluate the starting tour; it becomes the incumbent
//! 2. Each round:
//!    a. **2-opt pass**: for `i` in `0..n-1`, `k` in `i+1..n`, try
//!    [`reverse_segment`]`(incumbent, i, k)`
//!    b. **3-opt pass** (only if the 2-opt pass adopted nothing): for
//!    `i < j < k`, try the three [`ThreeOptMove`]s in order
//! 3. Stop when a round adopts nothing (local optimum) or the round cap
//!    is hit
//!
//! Acceptance is first-improvement and eager: a candidate strictly
//! shorter than the incumbent replaces it immediately and the scan
//! carries on from the next index tuple, comparing against the new
//! length. Every candidate is measured with a full
//! [`tour_length`](crate::tour::tour_length), so
//! results do not depend on delta arithmetic.
//!
//! # Complexity
//!
//! 2-opt pass O(n³), 3-opt pass O(n⁴).

use tracing::{debug, trace};

use super::config::LocalSearchConfig;
use super::operators::{reverse_segment, ThreeOptMove};
use super::types::Tour;
use crate::matrix::DistanceMatrix;

/// Result of a local search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchResult {
    /// Final tour.
    pub tour: Tour,
    /// Length of the final tour.
    pub length: f64,
    /// Length of the starting tour.
    pub initial_length: f64,
    /// Rounds executed.
    pub rounds: usize,
    /// 2-opt moves adopted.
    pub two_opt_moves: usize,
    /// 3-opt moves adopted.
    pub three_opt_moves: usize,
    /// `true` if the last round adopted nothing, i.e. the tour is a local
    /// optimum of the configured neighbourhood. `false` if the round cap
    /// stopped the search first.
    pub converged: bool,
    /// Tour length after each round (empty unless `record_history`).
    pub length_history: Vec<f64>,
}

/// The current best tour and its length, replaced together.
struct Incumbent {
    tour: Tour,
    length: f64,
}

impl Incumbent {
    fn new(tour: Tour, matrix: &DistanceMatrix) -> Self {
        let length = tour.length(matrix);
        Self { tour, length }
    }

    /// Adopts `candidate` if it is strictly shorter.
    fn offer(&mut self, candidate: Tour, matrix: &DistanceMatrix) -> bool {
        let length = candidate.length(matrix);
        if length < self.length {
            self.tour = candidate;
            self.length = length;
            true
        } else {
            false
        }
    }
}

/// 2-opt / 3-opt local search runner.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Improves `initial` until no configured move shortens it.
    ///
    /// # Panics
    /// Panics if `initial` and `matrix` cover a different number of cities.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::matrix::DistanceMatrix;
    /// use u_tour::tour::{LocalSearchConfig, LocalSearchRunner, Tour};
    ///
    /// // Unit square visited along a diagonal: 0 (0,0) → 1 (1,1) → 2 (1,0) → 3 (0,1)
    /// let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]);
    /// let result = LocalSearchRunner::run(Tour::identity(4), &m, &LocalSearchConfig::default());
    /// assert_eq!(result.length, 4.0);
    /// assert!(result.converged);
    /// ```
    pub fn run(
        initial: Tour,
        matrix: &DistanceMatrix,
        config: &LocalSearchConfig,
    ) -> LocalSearchResult {
        assert_eq!(
            initial.len(),
            matrix.len(),
            "tour and matrix must cover the same cities"
        );

        let mut incumbent = Incumbent::new(initial, matrix);
        let initial_length = incumbent.length;

        let mut length_history = Vec::new();
        let mut rounds = 0;
        let mut two_opt_moves = 0;
        let mut three_opt_moves = 0;

        let converged = loop {
            if config.max_rounds > 0 && rounds >= config.max_rounds {
                break false;
            }
            rounds += 1;

            let two_opt = Self::two_opt_pass(&mut incumbent, matrix);
            let three_opt = if two_opt == 0 && config.three_opt {
                Self::three_opt_pass(&mut incumbent, matrix)
            } else {
                0
            };
            two_opt_moves += two_opt;
            three_opt_moves += three_opt;

            if config.record_history {
                length_history.push(incumbent.length);
            }

            debug!(
                event = "round_end",
                round = rounds,
                two_opt_moves = two_opt,
                three_opt_moves = three_opt,
                length = incumbent.length,
            );

            if two_opt == 0 && three_opt == 0 {
                break true;
            }
        };

        debug!(
            event = "local_search_end",
            rounds,
            converged,
            initial_length,
            length = incumbent.length,
        );

        LocalSearchResult {
            tour: incumbent.tour,
            length: incumbent.length,
            initial_length,
            rounds,
            two_opt_moves,
            three_opt_moves,
            converged,
            length_history,
        }
    }

    /// One full 2-opt scan. Returns the number of adopted moves.
    fn two_opt_pass(incumbent: &mut Incumbent, matrix: &DistanceMatrix) -> usize {
        let n = incumbent.tour.len();
        let mut adopted = 0;

        for i in 0..n.saturating_sub(1) {
            for k in (i + 1)..n {
                let candidate = reverse_segment(&incumbent.tour, i, k);
                if incumbent.offer(candidate, matrix) {
                    adopted += 1;
                    trace!(event = "two_opt", i, k, length = incumbent.length);
                }
            }
        }

        adopted
    }

    /// One full 3-opt scan. Returns the number of adopted moves.
    fn three_opt_pass(incumbent: &mut Incumbent, matrix: &DistanceMatrix) -> usize {
        let n = incumbent.tour.len();
        let mut adopted = 0;

        for i in 0..n.saturating_sub(2) {
            for j in (i + 1)..n.saturating_sub(1) {
                for k in (j + 1)..n {
                    // All three reconnections are cut from the tour as it
                    // stood when this triple started.
                    let candidates =
                        ThreeOptMove::ALL.map(|mv| (mv, mv.apply(&incumbent.tour, i, j, k)));

                    for (mv, candidate) in candidates {
                        if incumbent.offer(candidate, matrix) {
                            adopted += 1;
                            trace!(event = "three_opt", ?mv, i, j, k, length = incumbent.length);
                        }
                    }
                }
            }
        }

        adopted
    }
}
