use std::time::Duration;

use boxbench_tree::TreeError;
use render_adapter::CaptureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("benchmark has no training trees")]
    EmptyTrainSet,

    #[error("benchmark has no test trees to score against")]
    EmptyTestSet,

    #[error("{tree} diverges at {path}: expected {expected:?}, found {actual:?}")]
    ShapeDivergence {
        tree: String,
        path: String,
        expected: Option<String>,
        actual: Option<String>,
    },

    #[error("focus root {name:?} not present in every tree")]
    FocusMissing { name: String },

    #[error("solver returned {actual} predicted trees for {expected} test trees")]
    PredictionCountMismatch { expected: usize, actual: usize },

    #[error("synthesis exceeded its {}s timeout", limit.as_secs())]
    SynthesisTimeout { limit: Duration },

    #[error("tree has negative extent: {name:?}")]
    NegativeExtent { name: Option<String> },

    #[error("collaborator failure: {0}")]
    Collaborator(String),

    #[error("invalid bounds: low {low} > high {high}")]
    InvalidBounds { low: u32, high: u32 },

    #[error("malformed benchmark JSON: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Capture(#[from] CaptureError),
}

impl HarnessError {
    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::Collaborator(msg.into())
    }
}
