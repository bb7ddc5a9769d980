//! Validated symmetric distance matrix.

use murmur_core::errors::ClusteringError;
use rayon::prelude::*;

/// Square, symmetric, zero-diagonal matrix of finite non-negative distances.
///
/// Construction validates every invariant, so a `DistanceMatrix` in hand is
/// always well-formed. Stored row-major in one flat buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

/// Position and value of the smallest off-diagonal entry.
/// `row > col` always holds: only the lower triangle is scanned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    pub row: usize,
    pub col: usize,
    pub distance: f64,
}

impl DistanceMatrix {
    /// Build from explicit rows, rejecting anything that is not a valid
    /// distance matrix.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ClusteringError> {
        let n = rows.len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return Err(ClusteringError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
        }
        let values: Vec<f64> = rows.into_iter().flatten().collect();
        Self::from_flat(n, values)
    }

    /// Build an `n`×`n` matrix from a pairwise distance function.
    ///
    /// `distance(i, j)` is called once per unordered pair with `i > j`, in
    /// parallel; the upper triangle mirrors it.
    pub fn from_fn<F>(n: usize, distance: F) -> Result<Self, ClusteringError>
    where
        F: Fn(usize, usize) -> f64 + Sync,
    {
        let distance = &distance;
        let lower: Vec<(usize, usize, f64)> = (1..n)
            .into_par_iter()
            .flat_map_iter(|i| (0..i).map(move |j| (i, j, distance(i, j))))
            .collect();

        let mut values = vec![0.0; n * n];
        for (i, j, d) in lower {
            values[i * n + j] = d;
            values[j * n + i] = d;
        }
        Self::from_flat(n, values)
    }

    fn from_flat(n: usize, values: Vec<f64>) -> Result<Self, ClusteringError> {
        let matrix = Self { n, values };
        matrix.validate()?;
        Ok(matrix)
    }

    fn validate(&self) -> Result<(), ClusteringError> {
        for row in 0..self.n {
            for col in 0..self.n {
                let value = self.get(row, col);
                if !value.is_finite() {
                    return Err(ClusteringError::NonFinite { row, col, value });
                }
                if value < 0.0 {
                    return Err(ClusteringError::Negative { row, col, value });
                }
            }
        }
        for index in 0..self.n {
            let value = self.get(index, index);
            if value != 0.0 {
                return Err(ClusteringError::NonZeroDiagonal { index, value });
            }
        }
        for row in 1..self.n {
            for col in 0..row {
                let (lower, upper) = (self.get(row, col), self.get(col, row));
                if lower != upper {
                    return Err(ClusteringError::Asymmetric {
                        row,
                        col,
                        upper,
                        lower,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between positions `row` and `col`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "index out of bounds");
        self.values[row * self.n + col]
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.chunks(self.n.max(1)).map(<[f64]>::to_vec).collect()
    }

    /// Smallest off-diagonal entry, or `None` with fewer than two rows.
    ///
    /// Scans rows `1..n` upward and, within each row, columns `0..row`; a
    /// candidate replaces the best only when strictly smaller. Ties therefore
    /// resolve to the smaller row, then the smaller column. Merge order, and
    /// hence the final clusters, depend on this exact rule.
    pub fn closest_pair(&self) -> Option<ClosestPair> {
        let mut best: Option<ClosestPair> = None;
        for row in 1..self.n {
            for col in 0..row {
                let distance = self.get(row, col);
                if best.map_or(true, |b| distance < b.distance) {
                    best = Some(ClosestPair { row, col, distance });
                }
            }
        }
        best
    }
}
