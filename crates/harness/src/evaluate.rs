//! Incremental train/test benchmark loop.
//!
//! Round `i` synthesizes constraints from the first `i` training trees,
//! solves them against the full test set, and scores the predictions.
//! The per-round records plot an error-vs-training-size curve. Rounds
//! are sequential, and a round failure aborts the whole run: later
//! rounds would not be comparable after a collaborator contract
//! violation.

use std::time::Instant;

use boxbench_tree::BoxTree;
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::bench::BenchResult;
use crate::config::Bounds;
use crate::errors::HarnessError;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::ports::{ConstraintSynthesizer, LayoutSolver, SynthOptions};

#[derive(Clone, Debug)]
pub struct EvalOptions {
    /// Number of rounds, i.e. the largest training subset to evaluate.
    /// Clamped to the available training trees.
    pub rounds: usize,
    pub synth: SynthOptions,
    /// Dimension bounds handed to synthesis. Usually the benchmark's own
    /// sampling bounds, but overridable from the driver.
    pub height: Bounds,
    pub width: Bounds,
    /// Restrict evaluation to the subtree with this name in every tree.
    pub focus: Option<String>,
}

impl EvalOptions {
    pub fn for_bench(bench: &BenchResult) -> Self {
        Self {
            rounds: bench.train.len(),
            synth: SynthOptions::default(),
            height: bench.bench.height,
            width: bench.bench.width,
            focus: None,
        }
    }
}

/// One row of the error-vs-training-size curve.
#[derive(Clone, Debug, Serialize)]
pub struct RoundReport {
    pub round: usize,
    /// Root width of the training tree added this round.
    pub train_root_width: f64,
    pub mean_rms: f64,
    pub mean_pixel_diff: f64,
    /// Fraction of test nodes placed exactly: Σ identical / Σ size.
    pub accuracy: f64,
    /// Total node count across the test set.
    pub node_count: usize,
    pub constraint_count: usize,
    pub timings: MetricsSnapshot,
}

pub struct Evaluator<S, L> {
    synthesizer: S,
    solver: L,
}

impl<S, L> Evaluator<S, L>
where
    S: ConstraintSynthesizer,
    L: LayoutSolver,
{
    pub fn new(synthesizer: S, solver: L) -> Self {
        Self { synthesizer, solver }
    }

    /// Run rounds `1..=k` over a validated benchmark. The benchmark's
    /// trees are never mutated; predicted trees live only for the round
    /// that scored them.
    pub async fn run(
        &self,
        bench: &BenchResult,
        options: &EvalOptions,
        metrics: &mut Metrics,
    ) -> Result<Vec<RoundReport>, HarnessError> {
        metrics.reset();

        let prep_start = Instant::now();
        let (train, test) = focus_sets(bench, options.focus.as_deref())?;
        metrics.record_prep(prep_start.elapsed());

        if train.is_empty() {
            return Err(HarnessError::EmptyTrainSet);
        }
        // validation tolerates an empty test split (the sampler may come
        // up short), but every per-round mean divides by the test count
        if test.is_empty() {
            return Err(HarnessError::EmptyTestSet);
        }
        let rounds = options.rounds.min(train.len());
        let mut reports = Vec::with_capacity(rounds);

        for round in 1..=rounds {
            let subset = &train[..round];
            debug!(round, subset = subset.len(), "starting evaluation round");

            let synth_start = Instant::now();
            let constraints = timeout(
                options.synth.timeout,
                self.synthesizer
                    .synthesize(subset, options.height, options.width, &options.synth),
            )
            .await
            .map_err(|_| HarnessError::SynthesisTimeout {
                limit: options.synth.timeout,
            })??;
            metrics.record_synth(synth_start.elapsed());

            let solve_start = Instant::now();
            let predicted = self.solver.solve(&constraints, &test).await?;
            metrics.record_resize(solve_start.elapsed());

            if predicted.len() != test.len() {
                return Err(HarnessError::PredictionCountMismatch {
                    expected: test.len(),
                    actual: predicted.len(),
                });
            }

            let report = score_round(round, subset, &test, &predicted, &constraints, metrics)?;
            info!(
                round,
                mean_rms = report.mean_rms,
                accuracy = report.accuracy,
                constraints = report.constraint_count,
                "round finished"
            );
            reports.push(report);
        }

        Ok(reports)
    }
}

fn score_round(
    round: usize,
    subset: &[BoxTree],
    test: &[BoxTree],
    predicted: &[BoxTree],
    constraints: &[crate::ports::Constraint],
    metrics: &Metrics,
) -> Result<RoundReport, HarnessError> {
    let mut rms_sum = 0.0;
    let mut pixel_sum = 0.0;
    let mut identical = 0usize;
    let mut nodes = 0usize;

    for (expected, prediction) in test.iter().zip(predicted) {
        rms_sum += expected.rms(prediction)?;
        pixel_sum += expected.pixel_diff(prediction)?;
        identical += expected.identical_placement(prediction);
        nodes += expected.size();
    }

    let examples = test.len() as f64;
    Ok(RoundReport {
        round,
        train_root_width: subset.last().map_or(0.0, |tree| tree.width),
        mean_rms: rms_sum / examples,
        mean_pixel_diff: pixel_sum / examples,
        accuracy: identical as f64 / nodes as f64,
        node_count: nodes,
        constraint_count: constraints.len(),
        timings: metrics.snapshot(),
    })
}

/// Re-root every tree at the focus node when one is requested. The
/// benchmark owns its trees, so both paths hand back clones.
fn focus_sets(
    bench: &BenchResult,
    focus: Option<&str>,
) -> Result<(Vec<BoxTree>, Vec<BoxTree>), HarnessError> {
    match focus {
        None => Ok((bench.train.clone(), bench.test.clone())),
        Some(name) => {
            let refocus = |trees: &[BoxTree]| -> Result<Vec<BoxTree>, HarnessError> {
                trees
                    .iter()
                    .map(|tree| {
                        tree.find(name)
                            .cloned()
                            .ok_or_else(|| HarnessError::FocusMissing {
                                name: name.to_string(),
                            })
                    })
                    .collect()
            };
            Ok((refocus(&bench.train)?, refocus(&bench.test)?))
        }
    }
}
