//! Property tests for exact dedup, burst aggregation, and the full pipeline.

use proptest::prelude::*;

use chrono::{DateTime, Duration, FixedOffset};
use murmur_consolidation::burst::consolidate_bursts;
use murmur_consolidation::dedup::consolidate_exact;
use murmur_consolidation::ConsolidationEngine;
use murmur_core::traits::IPostConsolidator;
use murmur_core::{MurmurConfig, Post};

const TEXTS: &[&str] = &[
    "Service update for the north line",
    "Service update for the north line #transit",
    "Service update for the north line https://t.co/a1",
    "Parade route announced for Saturday",
    "Parade route announced for Saturday!!",
    "Reminder: recycling pickup moved to Thursday",
];

const AUTHORS: &[&str] = &["alice", "bob", "carol"];

fn at(minutes: i64) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-05-01T06:00:00Z").unwrap() + Duration::minutes(minutes)
}

/// Posts with distinct ids and times, drawn from a small pool of texts/authors.
fn batch() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec((0..TEXTS.len(), 0..AUTHORS.len(), 0i64..240), 0..12).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (text, author, minutes))| {
                    Post::new(
                        format!("p{i}"),
                        AUTHORS[author],
                        TEXTS[text],
                        at(minutes * 13 + i as i64),
                        "en",
                    )
                })
                .collect()
        },
    )
}

fn sorted_ids(posts: &[Post]) -> Vec<String> {
    let mut ids: Vec<String> = posts.iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids
}

proptest! {
    #[test]
    fn prop_exact_dedup_ignores_input_order(posts in batch(), seed in any::<u64>()) {
        let mut shuffled = posts.clone();
        // Deterministic rotation + reversal as the reordering.
        if !shuffled.is_empty() {
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
            if seed % 2 == 0 {
                shuffled.reverse();
            }
        }
        prop_assert_eq!(
            sorted_ids(&consolidate_exact(posts)),
            sorted_ids(&consolidate_exact(shuffled))
        );
    }

    #[test]
    fn prop_exact_dedup_keeps_earliest(posts in batch()) {
        let kept = consolidate_exact(posts.clone());
        for survivor in &kept {
            let canonical = murmur_consolidation::normalize::canonicalize(&survivor.text);
            let earliest = posts
                .iter()
                .filter(|p| murmur_consolidation::normalize::canonicalize(&p.text) == canonical)
                .map(|p| p.created_at)
                .min();
            prop_assert_eq!(Some(survivor.created_at), earliest);
        }
    }

    #[test]
    fn prop_bursts_never_cross_authors(posts in batch(), window in 0u64..10_000_000) {
        let merged = consolidate_bursts(posts.clone(), window, None);
        let mut authors_in: Vec<&str> = posts.iter().map(|p| p.author.as_str()).collect();
        authors_in.sort();
        authors_in.dedup();
        let mut authors_out: Vec<&str> = merged.iter().map(|p| p.author.as_str()).collect();
        authors_out.sort();
        authors_out.dedup();
        prop_assert_eq!(authors_in, authors_out);
        prop_assert!(merged.len() <= posts.len());
    }

    #[test]
    fn prop_exact_only_pipeline_is_idempotent(posts in batch()) {
        let mut config = MurmurConfig::default();
        config.consolidation.dedupe_near_duplicates = false;
        let engine = ConsolidationEngine::new(config).unwrap();
        let once = engine.consolidate(posts).unwrap();
        let twice = engine.consolidate(once.clone()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
