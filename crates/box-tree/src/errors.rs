use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("mismatched shape of lhs, rhs in error calculation: {left} === {right}")]
    ShapeMismatch { left: String, right: String },
}

/// First point (in preorder) at which two trees stop being isomorphic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructureMismatch {
    /// Slash-joined node names from the root down to the offending node.
    pub path: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl std::fmt::Display for StructureMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "structure diverges at {}: expected {:?}, found {:?}",
            self.path, self.expected, self.actual
        )
    }
}
