use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use boxbench_harness::{
    BenchResult, Bounds, EvalOptions, Evaluator, LocalLearner, Metrics, SynthOptions, SynthVariant,
};
use clap::Args;
use tracing::info;

use super::output::print_table;
use super::parse_bounds;
use crate::collab::MockdownHttp;

#[derive(Clone, Debug, clap::ValueEnum)]
enum VariantOpt {
    Baseline,
    Hierarchical,
}

impl From<VariantOpt> for SynthVariant {
    fn from(value: VariantOpt) -> Self {
        match value {
            VariantOpt::Baseline => SynthVariant::Baseline,
            VariantOpt::Hierarchical => SynthVariant::Hierarchical,
        }
    }
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum LearnerOpt {
    Simple,
    Bayesian,
}

impl From<LearnerOpt> for LocalLearner {
    fn from(value: LearnerOpt) -> Self {
        match value {
            LearnerOpt::Simple => LocalLearner::Simple,
            LearnerOpt::Bayesian => LocalLearner::Bayesian,
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// Benchmark file (JSON) to evaluate against
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Base URL of the synthesis/solving service
    #[arg(long, default_value = "http://localhost:8030")]
    endpoint: String,

    /// Number of rounds; defaults to the training-set size
    #[arg(long)]
    rounds: Option<usize>,

    /// Synthesis timeout per round (e.g. "90s", "5m")
    #[arg(long, default_value = "2m", value_parser = humantime::parse_duration)]
    timeout: Duration,

    /// Synthesis algorithm family
    #[arg(long, value_enum, default_value = "hierarchical")]
    variant: VariantOpt,

    /// Local learner used inside synthesis
    #[arg(long, value_enum, default_value = "bayesian")]
    learner: LearnerOpt,

    /// Evaluate only the subtree with this name
    #[arg(long)]
    focus: Option<String>,

    /// Override the height range handed to synthesis
    #[arg(long, value_name = "LOW:HIGH", value_parser = parse_bounds)]
    height: Option<Bounds>,

    /// Override the width range handed to synthesis
    #[arg(long, value_name = "LOW:HIGH", value_parser = parse_bounds)]
    width: Option<Bounds>,

    /// Write the per-round reports to a JSON file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub async fn cmd_run(args: RunArgs) -> Result<()> {
    let bench = BenchResult::load(&args.input)?;

    let options = EvalOptions {
        rounds: args.rounds.unwrap_or(bench.train.len()),
        synth: SynthOptions {
            variant: args.variant.clone().into(),
            learner: args.learner.clone().into(),
            timeout: args.timeout,
        },
        height: args.height.unwrap_or(bench.bench.height),
        width: args.width.unwrap_or(bench.bench.width),
        focus: args.focus.clone(),
    };
    info!(
        name = %bench.name,
        endpoint = %args.endpoint,
        rounds = options.rounds,
        "starting evaluation"
    );

    let client = MockdownHttp::new(&args.endpoint)?;
    let evaluator = Evaluator::new(client.clone(), client);
    let mut metrics = Metrics::new();
    let reports = evaluator.run(&bench, &options, &mut metrics).await?;

    print_table(&bench.name, &reports);
    if let Some(path) = &args.output {
        let raw = serde_json::to_string_pretty(&reports)?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }
    Ok(())
}
