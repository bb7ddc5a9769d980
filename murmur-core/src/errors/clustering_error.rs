/// Distance matrix and label validation errors.
///
/// Raised before any merge executes. A malformed matrix means the caller
/// built it wrong, so these are never recovered internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClusteringError {
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("non-finite distance {value} at ({row}, {col})")]
    NonFinite { row: usize, col: usize, value: f64 },

    #[error("negative distance {value} at ({row}, {col})")]
    Negative { row: usize, col: usize, value: f64 },

    #[error("non-zero diagonal entry {value} at ({index}, {index})")]
    NonZeroDiagonal { index: usize, value: f64 },

    #[error("asymmetric distances at ({row}, {col}): {upper} != {lower}")]
    Asymmetric {
        row: usize,
        col: usize,
        upper: f64,
        lower: f64,
    },

    #[error("label count {labels} does not match matrix dimension {dimension}")]
    LabelCountMismatch { labels: usize, dimension: usize },

    #[error("label group at position {index} is empty")]
    EmptyGroup { index: usize },

    #[error("cannot merge fewer than two groups (got {groups})")]
    TooFewGroups { groups: usize },
}
