pub mod bench;
pub mod config;
pub mod errors;
pub mod evaluate;
pub mod interop;
pub mod metrics;
pub mod ports;
pub mod sampler;
pub mod validate;

pub use bench::BenchResult;
pub use config::{BenchConfig, Bounds};
pub use errors::HarnessError;
pub use evaluate::{EvalOptions, Evaluator, RoundReport};
pub use metrics::{Metrics, MetricsSnapshot};
pub use ports::{
    ComparisonOp, Constraint, ConstraintSynthesizer, LayoutSolver, LocalLearner, SynthOptions,
    SynthVariant,
};
pub use sampler::Sampler;
