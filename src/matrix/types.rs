//! Immutable n×n distance table.

use crate::error::{Result, TspError};

/// Row-major n×n table of pairwise distances.
///
/// The collaborator contract is `d(a, a) == 0` and `d(a, b) == d(b, a)`.
/// Constructors built from a pairwise function ([`from_fn`](Self::from_fn),
/// [`euclidean`](Self::euclidean)) guarantee both by evaluating only the
/// upper triangle. [`from_rows`](Self::from_rows) takes the table as given;
/// call [`validate`](Self::validate) to check it.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a symmetric, zero-diagonal matrix from a pairwise function.
    ///
    /// `f(a, b)` is called once for each `a < b`; the value is mirrored.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::matrix::DistanceMatrix;
    ///
    /// let m = DistanceMatrix::from_fn(3, |a, b| (b - a) as f64);
    /// assert_eq!(m.get(2, 0), 2.0);
    /// assert_eq!(m.get(1, 1), 0.0);
    /// ```
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = vec![0.0; n * n];
        for a in 0..n {
            for b in (a + 1)..n {
                let d = f(a, b);
                data[a * n + b] = d;
                data[b * n + a] = d;
            }
        }
        Self { n, data }
    }

    /// Same as [`from_fn`](Self::from_fn), with the upper-triangle rows
    /// evaluated in parallel. The resulting table is identical.
    #[cfg(feature = "parallel")]
    pub fn from_fn_par<F>(n: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        use rayon::prelude::*;

        let upper: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|a| ((a + 1)..n).map(|b| f(a, b)).collect())
            .collect();

        let mut data = vec![0.0; n * n];
        for (a, row) in upper.iter().enumerate() {
            for (offset, &d) in row.iter().enumerate() {
                let b = a + 1 + offset;
                data[a * n + b] = d;
                data[b * n + a] = d;
            }
        }
        Self { n, data }
    }

    /// Euclidean distances between planar `(x, y)` coordinates.
    pub fn euclidean(coords: &[(f64, f64)]) -> Self {
        Self::from_fn(coords.len(), |a, b| {
            let (ax, ay) = coords[a];
            let (bx, by) = coords[b];
            (ax - bx).hypot(ay - by)
        })
    }

    /// Wraps a caller-supplied table without checking its contents.
    ///
    /// Only the shape is checked: every row must have `rows.len()` entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(TspError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            data.extend(values);
        }
        Ok(Self { n, data })
    }

    /// Number of cities.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance from city `a` to city `b`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        assert!(a < self.n && b < self.n, "city index out of range");
        self.data[a * self.n + b]
    }

    /// All distances from city `a`.
    #[inline]
    pub fn row(&self, a: usize) -> &[f64] {
        &self.data[a * self.n..(a + 1) * self.n]
    }

    /// Checks the collaborator contract.
    ///
    /// Rejects NaN, infinite or negative entries, a non-zero diagonal and
    /// asymmetric pairs (exact comparison). Reports the first violation in
    /// row-major order.
    pub fn validate(&self) -> Result<()> {
        for a in 0..self.n {
            for b in 0..self.n {
                let value = self.get(a, b);
                if !value.is_finite() || value < 0.0 {
                    return Err(TspError::InvalidDistance {
                        from: a,
                        to: b,
                        value,
                    });
                }
                if a == b && value != 0.0 {
                    return Err(TspError::NonZeroDiagonal { city: a, value });
                }
                if b > a {
                    let backward = self.get(b, a);
                    if value != backward {
                        return Err(TspError::Asymmetric {
                            a,
                            b,
                            forward: value,
                            backward,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
