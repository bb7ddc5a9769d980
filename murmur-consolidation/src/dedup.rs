//! Exact and near-duplicate consolidation.
//!
//! Exact: posts sharing a canonical text collapse to the earliest one.
//! Near: UPGMA over normalized edit distance between canonical texts, merged
//! while the closest pair of groups is within the tolerance; each group keeps
//! its earliest post.

use std::collections::{HashMap, HashSet};

use murmur_clustering::{merge_step, normalized_distance, DistanceMatrix};
use murmur_core::config::ConsolidationConfig;
use murmur_core::errors::ClusteringError;
use murmur_core::Post;
use tracing::{debug, warn};

use crate::normalize::canonicalize;

/// A post paired with its canonical comparison text, for the duration of one
/// consolidation call.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalPost {
    pub post: Post,
    pub canonical_text: String,
}

impl CanonicalPost {
    pub fn new(post: Post) -> Self {
        let canonical_text = canonicalize(&post.text);
        Self {
            post,
            canonical_text,
        }
    }
}

/// Counts from one `consolidate_duplicates` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupCounts {
    pub exact: usize,
    pub near: usize,
}

/// Exact dedup, then near-duplicate grouping when enabled.
pub fn consolidate_duplicates(
    posts: Vec<Post>,
    config: &ConsolidationConfig,
) -> Result<(Vec<Post>, DedupCounts), ClusteringError> {
    let mut counts = DedupCounts::default();
    let batch: Vec<CanonicalPost> = posts.into_iter().map(CanonicalPost::new).collect();

    let before = batch.len();
    let mut batch = exact_survivors(batch);
    counts.exact = before - batch.len();

    if config.dedupe_near_duplicates {
        let before = batch.len();
        batch = near_survivors(
            batch,
            config.near_duplicate_tolerance,
            config.max_near_duplicate_batch,
        )?;
        counts.near = before - batch.len();
    }

    debug!(exact = counts.exact, near = counts.near, "duplicates consolidated");
    Ok((batch.into_iter().map(|c| c.post).collect(), counts))
}

/// Collapse posts with identical canonical text to the earliest one.
pub fn consolidate_exact(posts: Vec<Post>) -> Vec<Post> {
    let batch = posts.into_iter().map(CanonicalPost::new).collect();
    exact_survivors(batch).into_iter().map(|c| c.post).collect()
}

/// Collapse near-duplicates to the earliest post of each UPGMA group.
pub fn consolidate_near(
    posts: Vec<Post>,
    tolerance: f64,
    max_batch: usize,
) -> Result<Vec<Post>, ClusteringError> {
    let batch = posts.into_iter().map(CanonicalPost::new).collect();
    Ok(near_survivors(batch, tolerance, max_batch)?
        .into_iter()
        .map(|c| c.post)
        .collect())
}

/// Keep the earliest post per canonical text; ties go to the first seen.
/// Survivors keep their input order.
pub fn exact_survivors(batch: Vec<CanonicalPost>) -> Vec<CanonicalPost> {
    let mut winners: HashMap<&str, usize> = HashMap::new();
    for (i, candidate) in batch.iter().enumerate() {
        winners
            .entry(candidate.canonical_text.as_str())
            .and_modify(|w| {
                if candidate.post.created_at < batch[*w].post.created_at {
                    *w = i;
                }
            })
            .or_insert(i);
    }
    let keep: HashSet<usize> = winners.into_values().collect();
    retain_positions(batch, &keep)
}

/// Group near-duplicates with UPGMA and keep the earliest post of each group.
///
/// A no-op when `tolerance` is not a positive finite number, with fewer than
/// two posts, or when the batch exceeds `max_batch`. Survivors keep their
/// input order.
///
/// Not idempotent: average linkage can leave two survivors within
/// `tolerance` of each other when their groups' averages were not.
pub fn near_survivors(
    batch: Vec<CanonicalPost>,
    tolerance: f64,
    max_batch: usize,
) -> Result<Vec<CanonicalPost>, ClusteringError> {
    if !tolerance.is_finite() || tolerance <= 0.0 || batch.len() < 2 {
        return Ok(batch);
    }
    if batch.len() > max_batch {
        warn!(
            size = batch.len(),
            max_batch, "batch too large for near-duplicate grouping, skipping"
        );
        return Ok(batch);
    }

    let distances = DistanceMatrix::from_fn(batch.len(), |i, j| {
        normalized_distance(&batch[i].canonical_text, &batch[j].canonical_text)
    })?;
    let labels: Vec<Vec<usize>> = (0..batch.len()).map(|i| vec![i]).collect();
    let groups = cluster_within(labels, distances, tolerance)?;

    let keep: HashSet<usize> = groups
        .iter()
        .filter_map(|group| {
            // Atoms are sorted, so ties on time go to the earlier position.
            group
                .iter()
                .copied()
                .min_by_key(|&i| batch[i].post.created_at)
        })
        .collect();
    Ok(retain_positions(batch, &keep))
}

/// Merge label groups until the closest pair is farther apart than `tolerance`
/// or a single group remains.
pub fn cluster_within<A>(
    mut labels: Vec<Vec<A>>,
    mut distances: DistanceMatrix,
    tolerance: f64,
) -> Result<Vec<Vec<A>>, ClusteringError>
where
    A: Ord + Clone,
{
    while let Some(pair) = distances.closest_pair() {
        if pair.distance > tolerance {
            break;
        }
        let step = merge_step(&labels, &distances)?;
        debug!(
            distance = step.distance,
            groups = step.labels.len(),
            merged_size = step.labels[0].len(),
            "near-duplicate merge"
        );
        labels = step.labels;
        distances = step.distances;
    }
    Ok(labels)
}

fn retain_positions<T>(items: Vec<T>, keep: &HashSet<usize>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| keep.contains(i))
        .map(|(_, item)| item)
        .collect()
}
