use std::path::PathBuf;

use anyhow::{bail, Result};
use boxbench_harness::BenchResult;
use clap::Args;
use tracing::error;

#[derive(Args)]
pub struct ValidateArgs {
    /// Benchmark files (JSON) to check
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,
}

/// Check each file independently; one bad benchmark does not stop the
/// rest of the batch.
pub async fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let mut failures = 0usize;
    for path in &args.inputs {
        match BenchResult::load(path) {
            Ok(bench) => println!(
                "OK: '{}' is structurally consistent ({} train / {} test, {} boxes per tree)",
                bench.name,
                bench.train.len(),
                bench.test.len(),
                bench.train[0].size()
            ),
            Err(e) => {
                error!(path = %path.display(), %e, "benchmark failed validation");
                println!("FAIL: {}: {e}", path.display());
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} benchmark(s) failed validation", args.inputs.len());
    }
    Ok(())
}
