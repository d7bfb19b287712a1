//! Property tests: rollups always match a replay of the raw log from empty
//! state, and trend output respects its ordering contract.

use proptest::prelude::*;

use docent_analytics::{AnalyticsStore, TrendAnalyzer};
use docent_core::models::QueryLog;

const TAGS: &[&str] = &["alpha", "beta", "gamma"];

fn arb_entry() -> impl Strategy<Value = (usize, f64, Vec<f64>)> {
    (
        0..TAGS.len(),
        0.0f64..10.0,
        prop::collection::vec(0.0f64..=1.0, 0..4),
    )
}

proptest! {
    #[test]
    fn prop_component_rollup_matches_replay(
        entries in prop::collection::vec(arb_entry(), 1..40)
    ) {
        let store = AnalyticsStore::open_in_memory().unwrap();

        for (tag_idx, response_time, scores) in &entries {
            let entry = QueryLog::new(
                "prop query",
                "general",
                vec![TAGS[*tag_idx].to_string()],
                *response_time,
                scores.len(),
                scores.clone(),
            );
            store.log(&entry).unwrap();
        }

        for (tag_idx, tag) in TAGS.iter().enumerate() {
            let matching: Vec<_> = entries
                .iter()
                .filter(|(idx, _, _)| *idx == tag_idx)
                .collect();

            let stat = store.component_stat(tag).unwrap();
            let Some(stat) = stat else {
                prop_assert!(matching.is_empty());
                continue;
            };

            prop_assert_eq!(stat.query_count as usize, matching.len());

            // Replay the incremental mean from empty state.
            let (mut avg_rt, mut avg_sim, mut count) = (0.0f64, 0.0f64, 0u64);
            for (_, rt, scores) in &matching {
                let mean_sim = if scores.is_empty() {
                    0.0
                } else {
                    scores.iter().sum::<f64>() / scores.len() as f64
                };
                avg_rt = (avg_rt * count as f64 + rt) / (count + 1) as f64;
                avg_sim = (avg_sim * count as f64 + mean_sim) / (count + 1) as f64;
                count += 1;
            }
            prop_assert!((stat.avg_response_time - avg_rt).abs() < 1e-9);
            prop_assert!((stat.avg_similarity - avg_sim).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_daily_unique_components_is_a_distinct_count(
        tag_sets in prop::collection::vec(
            prop::collection::btree_set(0..TAGS.len(), 1..=TAGS.len()),
            1..20
        )
    ) {
        let store = AnalyticsStore::open_in_memory().unwrap();
        let mut union = std::collections::BTreeSet::new();

        for tags in &tag_sets {
            let components: Vec<String> =
                tags.iter().map(|idx| TAGS[*idx].to_string()).collect();
            union.extend(tags.iter().copied());
            let entry = QueryLog::new("q", "general", components, 1.0, 0, vec![]);
            store.log(&entry).unwrap();
        }

        let today = chrono::Utc::now().date_naive();
        let stat = store.daily_stat(today).unwrap().unwrap();
        prop_assert_eq!(stat.total_queries as usize, tag_sets.len());
        prop_assert_eq!(stat.unique_components as usize, union.len());
    }

    #[test]
    fn prop_trending_is_sorted_and_bounded(
        queries in prop::collection::vec(0..5usize, 1..30),
        limit in 1..6usize
    ) {
        let store = AnalyticsStore::open_in_memory().unwrap();

        for q in &queries {
            let entry = QueryLog::new(
                format!("query {q}"),
                "general",
                vec![],
                1.0,
                1,
                vec![*q as f64 / 10.0],
            );
            store.log(&entry).unwrap();
        }

        let trending = TrendAnalyzer::new(&store).get_trending(limit).unwrap();
        prop_assert!(trending.len() <= limit);
        for pair in trending.windows(2) {
            let ordered = pair[0].frequency > pair[1].frequency
                || (pair[0].frequency == pair[1].frequency
                    && pair[0].avg_similarity >= pair[1].avg_similarity);
            prop_assert!(ordered, "trending not sorted: {:?}", pair);
        }
    }
}
