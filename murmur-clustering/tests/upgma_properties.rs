//! Property tests for the edit distance and UPGMA merge step.

use proptest::prelude::*;

use murmur_clustering::{levenshtein, merge_step, normalized_distance, DistanceMatrix};

/// Random symmetric matrix with zero diagonal, built from integer weights so
/// values stay exact.
fn symmetric_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (2usize..9).prop_flat_map(|n| {
        prop::collection::vec(0u32..100, n * (n - 1) / 2).prop_map(move |weights| {
            let mut rows = vec![vec![0.0; n]; n];
            let mut w = weights.into_iter();
            for i in 1..n {
                for j in 0..i {
                    let d = f64::from(w.next().unwrap_or(0));
                    rows[i][j] = d;
                    rows[j][i] = d;
                }
            }
            rows
        })
    })
}

proptest! {
    #[test]
    fn prop_levenshtein_identity(s in "\\PC{0,24}") {
        prop_assert_eq!(levenshtein(&s, &s), 0);
    }

    #[test]
    fn prop_levenshtein_symmetric(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    #[test]
    fn prop_levenshtein_empty_is_length(s in "\\PC{0,24}") {
        prop_assert_eq!(levenshtein("", &s), s.chars().count());
    }

    #[test]
    fn prop_levenshtein_triangle(a in "[a-d]{0,8}", b in "[a-d]{0,8}", c in "[a-d]{0,8}") {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn prop_normalized_in_unit_range(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let d = normalized_distance(&a, &b);
        prop_assert!((0.0..=1.0).contains(&d));
    }

    #[test]
    fn prop_merging_partitions_atoms_and_terminates(rows in symmetric_matrix()) {
        let n = rows.len();
        let mut labels: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        let mut distances = DistanceMatrix::new(rows).unwrap();
        let mut steps = 0;

        while labels.len() > 1 {
            let before = labels.len();
            let step = merge_step(&labels, &distances).unwrap();
            labels = step.labels;
            distances = step.distances;
            steps += 1;

            prop_assert_eq!(labels.len(), before - 1);
            prop_assert_eq!(distances.len(), labels.len());

            let mut atoms: Vec<usize> = labels.iter().flatten().copied().collect();
            atoms.sort_unstable();
            prop_assert_eq!(atoms, (0..n).collect::<Vec<_>>());
        }
        prop_assert_eq!(steps, n - 1);
    }

    #[test]
    fn prop_merge_distance_is_global_minimum(rows in symmetric_matrix()) {
        let n = rows.len();
        let min = (1..n)
            .flat_map(|i| (0..i).map(move |j| (i, j)))
            .map(|(i, j)| rows[i][j])
            .fold(f64::INFINITY, f64::min);
        let labels: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        let distances = DistanceMatrix::new(rows).unwrap();
        let step = merge_step(&labels, &distances).unwrap();
        prop_assert_eq!(step.distance, min);
    }
}
