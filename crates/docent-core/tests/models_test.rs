use chrono::{TimeZone, Utc};
use docent_core::models::*;

#[test]
fn query_log_new_assigns_fresh_id_and_timestamp() {
    let a = QueryLog::new("how to use v-btn", "general", vec![], 0.5, 3, vec![0.9]);
    let b = QueryLog::new("how to use v-btn", "general", vec![], 0.5, 3, vec![0.9]);
    assert_ne!(a.id, b.id);
    assert!(a.user_feedback.is_none());
    assert!(a.session_id.is_none());
}

#[test]
fn mean_similarity_of_empty_score_list_is_zero() {
    let log = QueryLog::new("q", "general", vec![], 0.1, 0, vec![]);
    assert_eq!(log.mean_similarity(), 0.0);
}

#[test]
fn mean_similarity_averages_scores() {
    let log = QueryLog::new("q", "general", vec![], 0.1, 3, vec![0.9, 0.8, 0.7]);
    assert!((log.mean_similarity() - 0.8).abs() < 1e-12);
}

#[test]
fn date_is_the_utc_calendar_date() {
    let ts = Utc.with_ymd_and_hms(2026, 3, 14, 23, 59, 59).unwrap();
    let log = QueryLog::new("q", "general", vec![], 0.1, 0, vec![]).with_timestamp(ts);
    assert_eq!(log.date().to_string(), "2026-03-14");
}

#[test]
fn with_session_sets_session_id() {
    let log = QueryLog::new("q", "general", vec![], 0.1, 0, vec![]).with_session("20260314_0900");
    assert_eq!(log.session_id.as_deref(), Some("20260314_0900"));
}

#[test]
fn query_log_roundtrips_through_json() {
    let log = QueryLog::new(
        "styling v-card",
        "styling",
        vec!["v-card".into()],
        1.25,
        4,
        vec![0.91, 0.85],
    );
    let json = serde_json::to_string(&log).unwrap();
    let back: QueryLog = serde_json::from_str(&json).unwrap();
    assert_eq!(back.id, log.id);
    assert_eq!(back.components, log.components);
    assert_eq!(back.similarity_scores, log.similarity_scores);
}

#[test]
fn empty_summary_has_zero_values() {
    let summary = PerformanceSummary::empty(7);
    assert_eq!(summary.total_queries, 0);
    assert_eq!(summary.avg_response_time, 0.0);
    assert_eq!(summary.avg_similarity, 0.0);
    assert!(summary.top_components.is_empty());
    assert!(summary.query_types.is_empty());
}

#[test]
fn retrieval_result_starts_without_monitoring() {
    let result = RetrievalResult::new("answer", vec![SourceRecord::default()]);
    assert!(result.monitoring.is_none());
    assert!(result.sources[0].content.is_none());
    assert!(result.sources[0].similarity.is_none());
}
