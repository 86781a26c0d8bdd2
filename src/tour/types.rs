//! The tour value type.

use crate::error::TspError;
use crate::matrix::DistanceMatrix;

use super::operators::tour_length;

/// A closed visiting order: a permutation of the city indices `0..n`.
///
/// The edge from the last city back to the first is implicit. A `Tour` is
/// a value; every operator returns a new one and leaves its input alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// The tour `0, 1, …, n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Wraps an order the caller has already built as a permutation.
    pub(crate) fn from_order(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order), "tour must be a permutation");
        Self { order }
    }

    /// City indices in visiting order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cyclic length of this tour under `matrix`.
    pub fn length(&self, matrix: &DistanceMatrix) -> f64 {
        tour_length(&self.order, matrix)
    }
}

/// Returns `true` if `order` contains each of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    for &city in order {
        match seen.get_mut(city) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = TspError;

    fn try_from(order: Vec<usize>) -> Result<Self, Self::Error> {
        if is_permutation(&order) {
            Ok(Self { order })
        } else {
            Err(TspError::NotAPermutation { len: order.len() })
        }
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.order
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Tour::identity(4).as_slice(), &[0, 1, 2, 3]);
        assert!(Tour::identity(0).is_empty());
    }

    #[test]
    fn test_try_from_accepts_permutation() {
        let tour = Tour::try_from(vec![2, 0, 1]).unwrap();
        assert_eq!(tour.len(), 3);
        assert_eq!(tour.into_inner(), vec![2, 0, 1]);
    }

    #[test]
    fn test_try_from_rejects_duplicates_and_out_of_range() {
        assert_eq!(
            Tour::try_from(vec![0, 1, 1]),
            Err(TspError::NotAPermutation { len: 3 })
        );
        assert!(Tour::try_from(vec![0, 3, 1]).is_err());
    }

    #[test]
    fn test_is_permutation_empty() {
        assert!(is_permutation(&[]));
    }

    #[test]
    fn test_length_wraps_around() {
        let m = DistanceMatrix::from_fn(3, |a, b| (a + b) as f64);
        // 0→1 (1) + 1→2 (3) + 2→0 (2)
        assert_eq!(Tour::identity(3).length(&m), 6.0);
    }
}
