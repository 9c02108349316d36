use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::classifier::TokenKind;
use crate::models::ClassificationResult;

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    counter!("bfhl_requests_total").absolute(0);
    counter!("bfhl_rejected_total").absolute(0);
    for kind in [TokenKind::Numeric, TokenKind::Alphabetic, TokenKind::Special] {
        counter!("tokens_classified_total", "kind" => kind.as_str()).absolute(0);
    }

    // Histogram is lazily created on first record; force creation.
    histogram!("classify_duration_seconds").record(0.0);

    Ok(handle)
}

/// Handle backed by a recorder that is not installed globally.
///
/// Used where a global recorder may already exist (tests, embedding).
pub fn detached_handle() -> PrometheusHandle {
    PrometheusBuilder::new().build_recorder().handle()
}

pub fn record_classification(result: &ClassificationResult, elapsed_secs: f64) {
    counter!("bfhl_requests_total").increment(1);
    counter!("tokens_classified_total", "kind" => TokenKind::Numeric.as_str())
        .increment(result.numeric_count() as u64);
    counter!("tokens_classified_total", "kind" => TokenKind::Alphabetic.as_str())
        .increment(result.alphabets.len() as u64);
    counter!("tokens_classified_total", "kind" => TokenKind::Special.as_str())
        .increment(result.special_characters.len() as u64);
    histogram!("classify_duration_seconds").record(elapsed_secs);
}

pub fn record_rejection() {
    counter!("bfhl_rejected_total").increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn test_records_requests_tokens_and_rejections() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let result = classify(&["a", "1", "BC", "$"]).unwrap();

        ::metrics::with_local_recorder(&recorder, || {
            record_classification(&result, 0.25);
            record_rejection();
        });

        let text = recorder.handle().render();
        assert!(text.contains("bfhl_requests_total 1"), "{text}");
        assert!(text.contains("bfhl_rejected_total 1"), "{text}");
        assert!(text.contains(r#"tokens_classified_total{kind="numeric"} 1"#), "{text}");
        assert!(text.contains(r#"tokens_classified_total{kind="alphabetic"} 2"#), "{text}");
        assert!(text.contains(r#"tokens_classified_total{kind="special"} 1"#), "{text}");
        assert!(text.contains("classify_duration_seconds_count 1"), "{text}");
    }

    #[test]
    fn test_rejection_alone_leaves_request_counter_untouched() {
        let recorder = PrometheusBuilder::new().build_recorder();

        ::metrics::with_local_recorder(&recorder, || {
            record_rejection();
            record_rejection();
        });

        let text = recorder.handle().render();
        assert!(text.contains("bfhl_rejected_total 2"), "{text}");
        assert!(!text.contains("bfhl_requests_total"), "{text}");
    }
}
