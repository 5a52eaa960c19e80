//! Contracts for the external constraint-synthesis and solving
//! collaborators. Their internals (what the constraints mean, how the
//! solver satisfies them) are owned entirely by the collaborator; the
//! harness only moves trees in and predicted trees out.

use std::time::Duration;

use async_trait::async_trait;
use boxbench_tree::BoxTree;
use serde::{Deserialize, Serialize};

use crate::config::Bounds;
use crate::errors::HarnessError;

/// Opaque linear layout constraint as exchanged with the collaborators:
/// `lhs op a * rhs + b`, at the given strength. Variable references name
/// node attributes (e.g. `box3.width`), which is why deterministic
/// cross-capture naming matters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub lhs: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhs: Option<String>,
    pub a: f64,
    pub b: f64,
    pub op: ComparisonOp,
    pub strength: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ComparisonOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
}

/// Synthesis algorithm family, resolved once at configuration time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthVariant {
    Baseline,
    #[default]
    Hierarchical,
}

/// Local-learner strategy used inside synthesis.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalLearner {
    Simple,
    #[default]
    Bayesian,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthOptions {
    pub variant: SynthVariant,
    pub learner: LocalLearner,
    /// Upper bound on one synthesis call; the caller may override it per
    /// run. Expiry aborts the evaluation round.
    pub timeout: Duration,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            variant: SynthVariant::default(),
            learner: LocalLearner::default(),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Infers a constraint set from a set of training trees and the sampled
/// dimension bounds.
#[async_trait]
pub trait ConstraintSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        train: &[BoxTree],
        height: Bounds,
        width: Bounds,
        options: &SynthOptions,
    ) -> Result<Vec<Constraint>, HarnessError>;
}

/// Resolves a constraint set against each test tree's actual root
/// geometry, producing one predicted tree per test tree. The predicted
/// root is pinned to the corresponding test root's left/top/width/height
/// before solving.
#[async_trait]
pub trait LayoutSolver: Send + Sync {
    async fn solve(
        &self,
        constraints: &[Constraint],
        test: &[BoxTree],
    ) -> Result<Vec<BoxTree>, HarnessError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_wire_format_uses_symbolic_operators() {
        let constraint = Constraint {
            lhs: "box0.width".into(),
            rhs: Some("box.width".into()),
            a: 0.5,
            b: -10.0,
            op: ComparisonOp::Le,
            strength: 1000.0,
        };
        let json = serde_json::to_value(&constraint).unwrap();
        assert_eq!(json["op"], "<=");
        let back: Constraint = serde_json::from_value(json).unwrap();
        assert_eq!(back, constraint);
    }

    #[test]
    fn variant_names_are_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_value(SynthVariant::Hierarchical).unwrap(),
            "hierarchical"
        );
        assert_eq!(
            serde_json::to_value(LocalLearner::Bayesian).unwrap(),
            "bayesian"
        );
    }
}
