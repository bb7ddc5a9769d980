//! UPGMA (unweighted pair group method with arithmetic mean), one merge at a time.
//!
//! The engine is a pure single-step transform: callers decide when to stop
//! (typically once the closest pair is farther apart than a tolerance).

use murmur_core::errors::ClusteringError;
use tracing::trace;

use crate::matrix::DistanceMatrix;

/// Result of merging the closest pair of groups.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeStep<A> {
    /// The merged group first, then the untouched groups in their original order.
    pub labels: Vec<Vec<A>>,
    /// Distances indexed in parallel with `labels`.
    pub distances: DistanceMatrix,
    /// `(row, col)` of the merged pair in the input, with `row > col`.
    pub merged: (usize, usize),
    /// Distance at which the pair merged.
    pub distance: f64,
}

/// Merge the two closest label groups.
///
/// `labels[i]` is the group of atoms at row/column `i` of `distances`. The
/// merged group is the sorted union of both groups' atoms. Its distance to
/// each remaining group `k` is the atom-count-weighted mean
/// `(|A|·d(A,k) + |B|·d(B,k)) / (|A| + |B|)`, where `|A|` and `|B|` count
/// original atoms, not sub-groups. Distances between unmerged groups are
/// copied unchanged.
///
/// Fails before doing any work if the labels do not match the matrix, if
/// fewer than two groups are given, or if any group is empty.
pub fn merge_step<A>(
    labels: &[Vec<A>],
    distances: &DistanceMatrix,
) -> Result<MergeStep<A>, ClusteringError>
where
    A: Ord + Clone,
{
    let n = distances.len();
    if labels.len() != n {
        return Err(ClusteringError::LabelCountMismatch {
            labels: labels.len(),
            dimension: n,
        });
    }
    if n < 2 {
        return Err(ClusteringError::TooFewGroups { groups: n });
    }
    if let Some(index) = labels.iter().position(Vec::is_empty) {
        return Err(ClusteringError::EmptyGroup { index });
    }
    let pair = distances
        .closest_pair()
        .ok_or(ClusteringError::TooFewGroups { groups: n })?;
    let (a, b) = (pair.row, pair.col);

    let mut merged: Vec<A> = labels[a].iter().chain(&labels[b]).cloned().collect();
    merged.sort();

    let remaining: Vec<usize> = (0..n).filter(|&k| k != a && k != b).collect();
    let size_a = labels[a].len() as f64;
    let size_b = labels[b].len() as f64;

    let m = remaining.len() + 1;
    let mut rows = vec![vec![0.0; m]; m];
    for (i, &k) in remaining.iter().enumerate() {
        let weighted =
            (size_a * distances.get(a, k) + size_b * distances.get(b, k)) / (size_a + size_b);
        rows[0][i + 1] = weighted;
        rows[i + 1][0] = weighted;
        for (j, &l) in remaining.iter().enumerate() {
            rows[i + 1][j + 1] = distances.get(k, l);
        }
    }

    let mut new_labels = Vec::with_capacity(m);
    new_labels.push(merged);
    new_labels.extend(remaining.iter().map(|&k| labels[k].clone()));

    trace!(
        row = a,
        col = b,
        distance = pair.distance,
        groups = m,
        "UPGMA merge"
    );

    Ok(MergeStep {
        labels: new_labels,
        distances: DistanceMatrix::new(rows)?,
        merged: (a, b),
        distance: pair.distance,
    })
}
