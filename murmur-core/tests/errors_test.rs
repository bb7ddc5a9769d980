use murmur_core::errors::*;

#[test]
fn not_square_carries_dimensions() {
    let err = ClusteringError::NotSquare {
        row: 2,
        len: 4,
        expected: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("row 2"));
    assert!(msg.contains('4'));
    assert!(msg.contains('3'));
}

#[test]
fn asymmetric_carries_position_and_values() {
    let err = ClusteringError::Asymmetric {
        row: 2,
        col: 1,
        upper: 0.5,
        lower: 0.25,
    };
    let msg = err.to_string();
    assert!(msg.starts_with("asymmetric distances"));
    assert!(msg.contains("(2, 1)"));
    assert!(msg.contains("0.5"));
    assert!(msg.contains("0.25"));
}

#[test]
fn non_finite_carries_value() {
    let err = ClusteringError::NonFinite {
        row: 0,
        col: 1,
        value: f64::NAN,
    };
    assert!(err.to_string().contains("NaN"));
}

#[test]
fn label_mismatch_carries_counts() {
    let err = ClusteringError::LabelCountMismatch {
        labels: 3,
        dimension: 5,
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains('5'));
}

#[test]
fn invalid_pattern_carries_pattern() {
    let err = ConfigError::InvalidPattern {
        pattern: "(open".into(),
        message: "unclosed group".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("(open"));
    assert!(msg.contains("unclosed group"));
}

#[test]
fn validation_failed_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "consolidation.near_duplicate_tolerance".into(),
        message: "must be between 0.0 and 1.0".into(),
    };
    assert!(err
        .to_string()
        .contains("consolidation.near_duplicate_tolerance"));
}

#[test]
fn subsystem_errors_convert_into_murmur_error() {
    let err: MurmurError = ClusteringError::TooFewGroups { groups: 1 }.into();
    assert!(matches!(
        err,
        MurmurError::Clustering(ClusteringError::TooFewGroups { groups: 1 })
    ));
    assert!(err.to_string().starts_with("clustering error:"));

    let err: MurmurError = ConfigError::FileNotFound {
        path: "murmur.toml".into(),
    }
    .into();
    assert!(matches!(err, MurmurError::Config(_)));
    assert!(err.to_string().contains("murmur.toml"));
}

#[test]
fn question_mark_lifts_clustering_errors() {
    fn fails() -> MurmurResult<()> {
        let step: Result<(), ClusteringError> = Err(ClusteringError::EmptyGroup { index: 0 });
        step?;
        Ok(())
    }
    assert!(matches!(fails(), Err(MurmurError::Clustering(_))));
}
