//! The persisted unit of one benchmark: a named config plus its
//! captured train/test trees.

use std::fs;
use std::path::Path;

use boxbench_tree::BoxTree;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::BenchConfig;
use crate::errors::HarnessError;
use crate::validate::validate;

/// A captured benchmark. Owns its trees exclusively; the evaluator only
/// derives predicted trees from them, never mutates them.
///
/// Invariant: every tree in `train ∪ test` is structurally isomorphic to
/// `train[0]`. Enforced by [`BenchResult::assemble`] and re-checked on
/// every load, since the persisted file may have been produced elsewhere.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchResult {
    pub name: String,
    pub bench: BenchConfig,
    pub train: Vec<BoxTree>,
    pub test: Vec<BoxTree>,
}

impl BenchResult {
    /// Build a benchmark from freshly sampled splits, naming the trees
    /// and rejecting structurally inconsistent captures.
    pub fn assemble(
        name: impl Into<String>,
        bench: BenchConfig,
        train: Vec<BoxTree>,
        test: Vec<BoxTree>,
    ) -> Result<Self, HarnessError> {
        let mut result = Self {
            name: name.into(),
            bench,
            train,
            test,
        };
        validate(&mut result)?;
        Ok(result)
    }

    /// Load and validate a persisted benchmark. Naming is applied lazily
    /// here when the stored trees lack it.
    pub fn load(path: &Path) -> Result<Self, HarnessError> {
        let raw = fs::read_to_string(path)?;
        let mut result: Self = serde_json::from_str(&raw)?;
        validate(&mut result)?;
        info!(
            name = %result.name,
            train = result.train.len(),
            test = result.test.len(),
            path = %path.display(),
            "benchmark loaded"
        );
        Ok(result)
    }

    pub fn save(&self, path: &Path) -> Result<(), HarnessError> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        info!(name = %self.name, path = %path.display(), "benchmark saved");
        Ok(())
    }
}
