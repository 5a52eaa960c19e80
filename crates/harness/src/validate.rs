//! Structural consistency check over a captured benchmark.
//!
//! Pages whose DOM changes nondeterministically between captures produce
//! train/test sets that are not node-for-node comparable; every
//! downstream error metric assumes structural isomorphism, so a loaded
//! benchmark is rejected up front rather than failing mid-evaluation.

use boxbench_tree::{name_tree, BoxTree};
use tracing::debug;

use crate::bench::BenchResult;
use crate::errors::HarnessError;

/// Validate a benchmark in place.
///
/// Applies the deterministic namer to every tree first (idempotent, so
/// already-named captures are untouched), then checks every test tree
/// against `train[0]` and, symmetrically, every train tree against
/// `test[0]`. The first divergence fails validation with the offending
/// node's name and path.
pub fn validate(result: &mut BenchResult) -> Result<(), HarnessError> {
    if result.train.is_empty() {
        return Err(HarnessError::EmptyTrainSet);
    }

    for tree in result.train.iter_mut().chain(result.test.iter_mut()) {
        name_tree(tree);
    }

    let reference = result.train[0].clone();
    for (index, tree) in result.test.iter().enumerate() {
        check(&reference, tree, &format!("test[{index}]"))?;
    }
    if let Some(test_reference) = result.test.first() {
        for (index, tree) in result.train.iter().enumerate() {
            check(test_reference, tree, &format!("train[{index}]"))?;
        }
    }

    debug!(
        name = %result.name,
        train = result.train.len(),
        test = result.test.len(),
        "benchmark validated"
    );
    Ok(())
}

fn check(reference: &BoxTree, tree: &BoxTree, label: &str) -> Result<(), HarnessError> {
    reference
        .same_structure(tree)
        .map_err(|mismatch| HarnessError::ShapeDivergence {
            tree: label.to_string(),
            path: mismatch.path,
            expected: mismatch.expected,
            actual: mismatch.actual,
        })
}
