//! ReportGenerator — renders a point-in-time analytics snapshot into a
//! single self-contained HTML document.

use std::fmt::Write as _;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use docent_core::constants::{DEFAULT_SUMMARY_WINDOW_DAYS, DEFAULT_TRENDING_LIMIT};
use docent_core::errors::{DocentError, DocentResult, ReportError};
use docent_core::models::{PerformanceSummary, TrendingQuery};

use crate::store::AnalyticsStore;
use crate::trends::TrendAnalyzer;

/// Renders summary + rollups + trends into a static document. No external
/// asset dependencies; viewable directly.
pub struct ReportGenerator<'a> {
    store: &'a AnalyticsStore,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(store: &'a AnalyticsStore) -> Self {
        Self { store }
    }

    /// Generate a report with the default window (7 days) and trend limit (10).
    pub fn generate_report(&self, destination: &Path) -> DocentResult<()> {
        self.generate_report_with(destination, DEFAULT_SUMMARY_WINDOW_DAYS, DEFAULT_TRENDING_LIMIT)
    }

    /// Generate a report over a caller-chosen summary window and trend
    /// limit. The trending table keeps its own fixed window; widening the
    /// summary must not dilute "trending" with stale queries.
    /// A write failure is fatal for this call only.
    pub fn generate_report_with(
        &self,
        destination: &Path,
        summary_window_days: i64,
        trend_limit: usize,
    ) -> DocentResult<()> {
        let summary = self.store.get_summary(summary_window_days)?;
        let trending = TrendAnalyzer::new(self.store).get_trending(trend_limit)?;

        let html = render(&summary, &trending);

        std::fs::write(destination, html).map_err(|e| {
            DocentError::Report(ReportError::Write {
                path: destination.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        info!(path = %destination.display(), "analytics report generated");
        Ok(())
    }
}

/// Render the full HTML document.
fn render(summary: &PerformanceSummary, trending: &[TrendingQuery]) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Docent Analytics Report</title>\n<style>\n\
         body { font-family: Arial, sans-serif; margin: 20px; }\n\
         .header { background: #1976D2; color: white; padding: 20px; border-radius: 8px; }\n\
         .metric { background: #f5f5f5; padding: 15px; margin: 10px 0; border-radius: 5px; }\n\
         table { width: 100%; border-collapse: collapse; margin: 20px 0; }\n\
         th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }\n\
         th { background-color: #f2f2f2; }\n\
         </style>\n</head>\n<body>\n",
    );

    let _ = write!(
        html,
        "<div class=\"header\">\n<h1>Docent Analytics Report</h1>\n\
         <p>Query performance for the documentation retrieval assistant</p>\n\
         <p>Generated: {}</p>\n</div>\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    );

    // Summary metrics.
    let _ = write!(
        html,
        "<h2>Performance Summary (last {} days)</h2>\n\
         <div class=\"metric\"><strong>Total Queries:</strong> {}</div>\n\
         <div class=\"metric\"><strong>Average Response Time:</strong> {:.3}s</div>\n\
         <div class=\"metric\"><strong>Average Similarity Score:</strong> {:.3}</div>\n",
        summary.period_days, summary.total_queries, summary.avg_response_time, summary.avg_similarity
    );

    // Top components.
    html.push_str(
        "<h2>Top Components</h2>\n<table>\n<tr><th>Component</th><th>Queries</th>\
         <th>Avg Response Time</th><th>Avg Similarity</th></tr>\n",
    );
    for comp in &summary.top_components {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{:.3}s</td><td>{:.3}</td></tr>\n",
            escape(&comp.component),
            comp.query_count,
            comp.avg_response_time,
            comp.avg_similarity
        );
    }
    html.push_str("</table>\n");

    // Trending queries.
    html.push_str(
        "<h2>Trending Queries</h2>\n<table>\n<tr><th>Query</th><th>Frequency</th>\
         <th>Avg Response Time</th><th>Avg Similarity</th></tr>\n",
    );
    for trend in trending {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{:.3}s</td><td>{:.3}</td></tr>\n",
            escape(&trend.query),
            trend.frequency,
            trend.avg_response_time,
            trend.avg_similarity
        );
    }
    html.push_str("</table>\n");

    // Query type distribution, guarding the zero-total case.
    html.push_str(
        "<h2>Query Type Distribution</h2>\n<table>\n<tr><th>Query Type</th>\
         <th>Count</th><th>Percentage</th></tr>\n",
    );
    let total_typed: u64 = summary.query_types.iter().map(|(_, count)| count).sum();
    for (query_type, count) in &summary.query_types {
        let percentage = if total_typed > 0 {
            *count as f64 / total_typed as f64 * 100.0
        } else {
            0.0
        };
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{:.1}%</td></tr>\n",
            escape(query_type),
            count,
            percentage
        );
    }
    html.push_str("</table>\n</body>\n</html>\n");

    html
}

/// Minimal HTML escaping for user-originated text.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
