//! Rollup consistency and summary behavior against an in-memory store.

use chrono::{Duration, Utc};
use docent_analytics::AnalyticsStore;
use docent_core::models::QueryLog;

fn entry(query: &str, components: &[&str], response_time: f64, scores: &[f64]) -> QueryLog {
    QueryLog::new(
        query,
        "general",
        components.iter().map(|c| c.to_string()).collect(),
        response_time,
        scores.len(),
        scores.to_vec(),
    )
}

// ── Component rollup ──────────────────────────────────────────────────────

#[test]
fn component_stat_tracks_count_and_running_means() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    // Mean similarities 0.9, 0.8, 0.7 with response times 1.0, 2.0, 3.0.
    store.log(&entry("q1", &["alpha"], 1.0, &[0.9])).unwrap();
    store.log(&entry("q2", &["alpha"], 2.0, &[0.8])).unwrap();
    store.log(&entry("q3", &["alpha"], 3.0, &[0.7])).unwrap();

    let stat = store.component_stat("alpha").unwrap().expect("stat exists");
    assert_eq!(stat.query_count, 3);
    assert!((stat.avg_response_time - 2.0).abs() < 1e-9);
    assert!((stat.avg_similarity - 0.8).abs() < 1e-9);
}

#[test]
fn component_counts_are_per_tag_not_per_entry() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    store.log(&entry("q1", &["alpha", "beta"], 1.0, &[0.5])).unwrap();
    store.log(&entry("q2", &["beta"], 1.0, &[0.5])).unwrap();

    assert_eq!(store.component_stat("alpha").unwrap().unwrap().query_count, 1);
    assert_eq!(store.component_stat("beta").unwrap().unwrap().query_count, 2);
    assert!(store.component_stat("gamma").unwrap().is_none());
}

#[test]
fn empty_score_list_contributes_zero_to_similarity_mean() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    store.log(&entry("q1", &["alpha"], 1.0, &[0.8])).unwrap();
    store.log(&entry("q2", &["alpha"], 1.0, &[])).unwrap();

    let stat = store.component_stat("alpha").unwrap().unwrap();
    assert!((stat.avg_similarity - 0.4).abs() < 1e-9);
}

#[test]
fn component_last_queried_advances() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    let early = Utc::now() - Duration::days(2);
    store
        .log(&entry("q1", &["alpha"], 1.0, &[0.5]).with_timestamp(early))
        .unwrap();
    store.log(&entry("q2", &["alpha"], 1.0, &[0.5])).unwrap();

    let stat = store.component_stat("alpha").unwrap().unwrap();
    assert!(stat.last_queried > early);
}

// ── Daily rollup ──────────────────────────────────────────────────────────

#[test]
fn daily_unique_components_is_a_union_not_a_sum() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    store.log(&entry("q1", &["alpha", "beta"], 1.0, &[0.5])).unwrap();
    store.log(&entry("q2", &["beta", "gamma"], 1.0, &[0.5])).unwrap();

    let today = Utc::now().date_naive();
    let stat = store.daily_stat(today).unwrap().expect("stat exists");
    assert_eq!(stat.total_queries, 2);
    assert_eq!(stat.unique_components, 3);
}

#[test]
fn daily_stat_keys_on_the_entry_date() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    let yesterday = Utc::now() - Duration::days(1);
    store
        .log(&entry("q1", &["alpha"], 2.0, &[0.6]).with_timestamp(yesterday))
        .unwrap();
    store.log(&entry("q2", &["beta"], 4.0, &[0.8])).unwrap();

    let y = store.daily_stat(yesterday.date_naive()).unwrap().unwrap();
    assert_eq!(y.total_queries, 1);
    assert!((y.avg_response_time - 2.0).abs() < 1e-9);

    let t = store.daily_stat(Utc::now().date_naive()).unwrap().unwrap();
    assert_eq!(t.total_queries, 1);
    assert!((t.avg_response_time - 4.0).abs() < 1e-9);
}

// ── Summary ───────────────────────────────────────────────────────────────

#[test]
fn summary_of_empty_store_is_all_zeros() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    let summary = store.get_summary(7).unwrap();
    assert_eq!(summary.total_queries, 0);
    assert_eq!(summary.avg_response_time, 0.0);
    assert_eq!(summary.avg_similarity, 0.0);
    assert!(summary.top_components.is_empty());
    assert!(summary.query_types.is_empty());
}

#[test]
fn summary_is_window_filtered() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    let old = Utc::now() - Duration::days(30);
    store
        .log(&entry("old query", &["alpha"], 9.0, &[0.1]).with_timestamp(old))
        .unwrap();
    store.log(&entry("fresh query", &["beta"], 1.0, &[0.9])).unwrap();

    let summary = store.get_summary(7).unwrap();
    assert_eq!(summary.total_queries, 1);
    assert!((summary.avg_response_time - 1.0).abs() < 1e-9);
    assert!((summary.avg_similarity - 0.9).abs() < 1e-9);

    // Top components are window-consistent: the stale tag does not appear.
    let tags: Vec<&str> = summary
        .top_components
        .iter()
        .map(|c| c.component.as_str())
        .collect();
    assert_eq!(tags, vec!["beta"]);
}

#[test]
fn summary_ranks_components_by_window_count() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    store.log(&entry("q1", &["alpha"], 1.0, &[0.5])).unwrap();
    store.log(&entry("q2", &["alpha", "beta"], 1.0, &[0.5])).unwrap();
    store.log(&entry("q3", &["beta"], 1.0, &[0.5])).unwrap();
    store.log(&entry("q4", &["beta"], 1.0, &[0.5])).unwrap();

    let summary = store.get_summary(7).unwrap();
    assert_eq!(summary.top_components[0].component, "beta");
    assert_eq!(summary.top_components[0].query_count, 3);
    assert_eq!(summary.top_components[1].component, "alpha");
    assert_eq!(summary.top_components[1].query_count, 2);
}

#[test]
fn summary_breaks_down_query_types() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    store
        .log(&QueryLog::new("a", "api_reference", vec![], 0.1, 0, vec![]))
        .unwrap();
    store
        .log(&QueryLog::new("b", "api_reference", vec![], 0.1, 0, vec![]))
        .unwrap();
    store
        .log(&QueryLog::new("c", "styling", vec![], 0.1, 0, vec![]))
        .unwrap();

    let summary = store.get_summary(7).unwrap();
    assert_eq!(
        summary.query_types,
        vec![("api_reference".to_string(), 2), ("styling".to_string(), 1)]
    );
}

// ── Feedback ──────────────────────────────────────────────────────────────

#[test]
fn feedback_attaches_by_the_returned_id() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    let id = store.log(&entry("q1", &[], 0.1, &[])).unwrap();
    store.add_feedback(&id, "helpful").unwrap();

    let log = store.get_log(&id).unwrap().expect("log exists");
    assert_eq!(log.user_feedback.as_deref(), Some("helpful"));
}

#[test]
fn feedback_for_unknown_id_is_an_error() {
    let store = AnalyticsStore::open_in_memory().unwrap();
    let err = store.add_feedback("no-such-id", "helpful").unwrap_err();
    assert!(err.to_string().contains("no-such-id"));
}

// ── Raw log round-trip ────────────────────────────────────────────────────

#[test]
fn logged_entry_round_trips_including_scores() {
    let store = AnalyticsStore::open_in_memory().unwrap();

    let entry = entry("how to theme v-btn", &["v-btn"], 0.42, &[0.91, 0.88])
        .with_session("20260314_0900");
    let id = store.log(&entry).unwrap();
    assert_eq!(id, entry.id);

    let loaded = store.get_log(&id).unwrap().expect("log exists");
    assert_eq!(loaded.query, "how to theme v-btn");
    assert_eq!(loaded.components, vec!["v-btn"]);
    assert_eq!(loaded.similarity_scores, vec![0.91, 0.88]);
    assert_eq!(loaded.num_results, 2);
    assert_eq!(loaded.session_id.as_deref(), Some("20260314_0900"));
}
