use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use boxbench_harness::{BenchConfig, BenchResult, Bounds, Sampler};
use clap::Args;
use render_adapter::{DomNode, ExtractPolicy, StaticRenderer};
use tracing::info;

use super::parse_bounds;

#[derive(Args)]
pub struct SampleArgs {
    /// Page URL the snapshot was taken from (recorded in logs)
    #[arg(long, default_value = "file:///snapshot")]
    url: String,

    /// DOM snapshot file (JSON) to capture from
    #[arg(long, value_name = "FILE")]
    snapshot: PathBuf,

    /// Benchmark name
    #[arg(long)]
    name: String,

    /// Output file for the benchmark (JSON)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Viewport height range
    #[arg(long, value_name = "LOW:HIGH", default_value = "600:900", value_parser = parse_bounds)]
    height: Bounds,

    /// Viewport width range
    #[arg(long, value_name = "LOW:HIGH", default_value = "320:1024", value_parser = parse_bounds)]
    width: Bounds,

    /// Training split seed
    #[arg(long, default_value_t = 0)]
    train_seed: u64,

    /// Training split size
    #[arg(long, default_value_t = 10)]
    train_size: usize,

    /// Test split seed
    #[arg(long, default_value_t = 1)]
    test_seed: u64,

    /// Test split size
    #[arg(long, default_value_t = 10)]
    test_size: usize,

    /// Clamp child overflow after flattening
    #[arg(long)]
    smooth: bool,

    /// Tag whose subtree is dropped during extraction (repeatable,
    /// replaces the default text-tag list)
    #[arg(long = "exclude", value_name = "TAG")]
    excluded_tags: Vec<String>,

    /// Class treated as an opaque leaf during extraction (repeatable)
    #[arg(long = "opaque", value_name = "CLASS")]
    opaque_classes: Vec<String>,
}

pub async fn cmd_sample(args: SampleArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.snapshot)
        .with_context(|| format!("Failed to read snapshot {}", args.snapshot.display()))?;
    let dom: DomNode = serde_json::from_str(&raw).context("Failed to parse DOM snapshot")?;

    let mut policy = ExtractPolicy::default();
    if !args.excluded_tags.is_empty() {
        policy.excluded_tags = args.excluded_tags.iter().cloned().collect();
    }
    if !args.opaque_classes.is_empty() {
        policy = policy.with_opaque_classes(args.opaque_classes.clone());
    }

    let config = BenchConfig {
        height: args.height,
        width: args.width,
        train_seed: args.train_seed,
        train_size: args.train_size,
        test_seed: args.test_seed,
        test_size: args.test_size,
    };

    let renderer = StaticRenderer::from_snapshot(dom);
    let sampler = Sampler::new(renderer, policy).with_smooth(args.smooth);
    let (train, test) = sampler.run(&args.url, &config).await;
    info!(
        train = train.len(),
        test = test.len(),
        "capture finished, assembling benchmark"
    );

    let bench = BenchResult::assemble(&args.name, config, train, test)?;
    bench.save(&args.output)?;
    println!(
        "Wrote benchmark '{}' ({} train / {} test) to {}",
        bench.name,
        bench.train.len(),
        bench.test.len(),
        args.output.display()
    );
    Ok(())
}
