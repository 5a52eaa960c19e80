//! Timing context for an evaluation run. An owned value passed through
//! the evaluator (not process-wide state), so concurrent or repeated
//! runs stay independently reproducible.

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Default)]
pub struct Metrics {
    prep: Vec<Duration>,
    resize: Vec<Duration>,
    synth: Duration,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.prep.clear();
        self.resize.clear();
        self.synth = Duration::ZERO;
    }

    /// Time spent preparing a round's inputs (naming, focus filtering,
    /// wire conversion).
    pub fn record_prep(&mut self, elapsed: Duration) {
        self.prep.push(elapsed);
    }

    /// Time spent resolving the constraint set against one round's test
    /// set.
    pub fn record_resize(&mut self, elapsed: Duration) {
        self.resize.push(elapsed);
    }

    /// Wall-clock duration of the latest synthesis call.
    pub fn record_synth(&mut self, elapsed: Duration) {
        self.synth = elapsed;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            prep_s: mean_seconds(&self.prep),
            resize_s: mean_seconds(&self.resize),
            synth_s: self.synth.as_secs_f64(),
        }
    }
}

fn mean_seconds(samples: &[Duration]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().map(Duration::as_secs_f64).sum::<f64>() / samples.len() as f64
}

/// Averaged timings in seconds, as reported per evaluation round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub prep_s: f64,
    pub resize_s: f64,
    pub synth_s: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_averages_recorded_samples() {
        let mut metrics = Metrics::new();
        metrics.record_resize(Duration::from_millis(100));
        metrics.record_resize(Duration::from_millis(300));
        metrics.record_synth(Duration::from_secs(2));

        let snap = metrics.snapshot();
        assert!((snap.resize_s - 0.2).abs() < 1e-9);
        assert_eq!(snap.synth_s, 2.0);
        assert_eq!(snap.prep_s, 0.0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut metrics = Metrics::new();
        metrics.record_prep(Duration::from_millis(50));
        metrics.record_synth(Duration::from_secs(1));
        metrics.reset();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }
}
