use gemsearch_core::SearchSummary;
use tracing::info;

/// Receives the summary of each evaluated search. Recording happens after
/// the result is built and is not part of the measured search time.
pub trait AnalyticsSink {
    fn record(&self, summary: &SearchSummary);
}

/// Emits each summary as a structured log event
#[derive(Debug, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, summary: &SearchSummary) {
        info!(
            target: "gemsearch::analytics",
            total_count = summary.total_count,
            elapsed_ms = summary.elapsed_time_millis,
            applied_filters = ?summary.applied_filters,
            "search evaluated"
        );
    }
}
