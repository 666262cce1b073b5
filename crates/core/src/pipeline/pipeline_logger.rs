use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting logger for organize run events.
///
/// Keeps the use case independent of where its status output ends up
/// (log crate, test capture, nothing at all).
pub trait PipelineLogger {
    /// Report identity-level progress of the copy stage.
    fn progress(&mut self, current: usize, total: usize);

    /// Record how long a named stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a named count (identities found, files copied, ...).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events. Used by tests.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger: forwards messages to `log::info!` and prints a
/// per-stage timing summary when the run completes.
///
/// Progress is logged every `throttle_identities` identities and on the
/// last one, to keep large datasets from flooding the log.
pub struct StdoutPipelineLogger {
    throttle_identities: usize,
    last_reported: Option<usize>,
    timings: HashMap<String, f64>,
    stage_order: Vec<String>,
    metrics: HashMap<String, f64>,
    start_time: Instant,
}

impl StdoutPipelineLogger {
    pub fn new(throttle_identities: usize) -> Self {
        Self {
            throttle_identities: throttle_identities.max(1),
            last_reported: None,
            timings: HashMap::new(),
            stage_order: Vec::new(),
            metrics: HashMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if no stage ran.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!("Run summary ({:.1}s total):", elapsed_ms / 1000.0)];

        for stage in &self.stage_order {
            let ms = self.timings[stage];
            lines.push(format!("  {stage:10}: {ms:8.1}ms"));
        }

        let mut metric_names: Vec<_> = self.metrics.keys().collect();
        metric_names.sort();
        for name in metric_names {
            lines.push(format!("  {name}: {}", self.metrics[name]));
        }

        Some(lines.join("\n"))
    }

    pub fn timing_for(&self, stage: &str) -> Option<f64> {
        self.timings.get(stage).copied()
    }

    pub fn metric_for(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

impl Default for StdoutPipelineLogger {
    fn default() -> Self {
        Self::new(10)
    }
}

impl PipelineLogger for StdoutPipelineLogger {
    fn progress(&mut self, current: usize, total: usize) {
        if total > 0 && (current % self.throttle_identities == 0 || current == total) {
            let pct = current as f64 / total as f64 * 100.0;
            log::info!("Organizing: {current}/{total} identities ({pct:.1}%)");
            self.last_reported = Some(current);
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        if !self.timings.contains_key(stage) {
            self.stage_order.push(stage.to_string());
        }
        *self.timings.entry(stage.to_string()).or_default() += duration_ms;
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.insert(name.to_string(), value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.progress(1, 2);
        logger.timing("copy", 5.0);
        logger.metric("files_copied", 3.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_progress_throttled() {
        let mut logger = StdoutPipelineLogger::new(10);
        logger.progress(5, 25);
        assert_eq!(logger.last_reported, None);
        logger.progress(10, 25);
        assert_eq!(logger.last_reported, Some(10));
        logger.progress(11, 25);
        assert_eq!(logger.last_reported, Some(10));
        logger.progress(25, 25);
        assert_eq!(logger.last_reported, Some(25));
    }

    #[test]
    fn test_progress_with_unit_throttle_reports_every_identity() {
        let mut logger = StdoutPipelineLogger::new(1);
        for i in 1..=3 {
            logger.progress(i, 3);
            assert_eq!(logger.last_reported, Some(i));
        }
    }

    #[test]
    fn test_progress_ignores_empty_total() {
        let mut logger = StdoutPipelineLogger::new(1);
        logger.progress(0, 0);
        assert_eq!(logger.last_reported, None);
    }

    #[test]
    fn test_timing_accumulates_per_stage() {
        let mut logger = StdoutPipelineLogger::default();
        logger.timing("copy", 20.0);
        logger.timing("copy", 30.0);
        logger.timing("load", 5.0);

        assert_eq!(logger.timing_for("copy"), Some(50.0));
        assert_eq!(logger.timing_for("load"), Some(5.0));
        assert!(logger.timing_for("manifest").is_none());
    }

    #[test]
    fn test_metric_keeps_latest_value() {
        let mut logger = StdoutPipelineLogger::default();
        logger.metric("identities_found", 3.0);
        logger.metric("identities_found", 4.0);
        assert_eq!(logger.metric_for("identities_found"), Some(4.0));
    }

    #[test]
    fn test_summary_lists_stages_in_first_seen_order() {
        let mut logger = StdoutPipelineLogger::default();
        logger.timing("load", 1.0);
        logger.timing("group", 2.0);
        logger.timing("copy", 3.0);
        logger.metric("files_copied", 12.0);

        let summary = logger.summary_string().unwrap();
        assert!(summary.starts_with("Run summary"));
        let load = summary.find("load").unwrap();
        let group = summary.find("group").unwrap();
        let copy = summary.find("copy").unwrap();
        assert!(load < group && group < copy);
        assert!(summary.contains("files_copied: 12"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = StdoutPipelineLogger::default();
        assert!(logger.summary_string().is_none());
    }

    #[test]
    fn test_default_throttle() {
        let logger = StdoutPipelineLogger::default();
        assert_eq!(logger.throttle_identities, 10);
    }
}
