use thiserror::Error;

use crate::window::Viewport;

/// Failures while capturing one sample. Isolated to that sample: the
/// sampler drops the capture and moves on rather than substituting a
/// replacement.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("element <{tag}> has no usable bounding box")]
    MissingBounds { tag: String },
    #[error("no snapshot available for viewport {0}")]
    NoSnapshot(Viewport),
    #[error("unknown window handle: {0}")]
    UnknownWindow(String),
    #[error("renderer failure: {0}")]
    Renderer(String),
}

impl CaptureError {
    pub fn renderer(msg: impl Into<String>) -> Self {
        Self::Renderer(msg.into())
    }
}
