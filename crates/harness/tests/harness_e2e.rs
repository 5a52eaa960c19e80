//! Full pipeline: snapshot renderer -> sampler -> persisted benchmark ->
//! evaluation with in-process collaborators.

use async_trait::async_trait;
use boxbench_harness::{
    BenchConfig, BenchResult, Bounds, Constraint, ConstraintSynthesizer, EvalOptions, Evaluator,
    HarnessError, LayoutSolver, Metrics, Sampler, SynthOptions,
};
use boxbench_tree::BoxTree;
use render_adapter::{BoundingRect, DomNode, ExtractPolicy, StaticRenderer};

fn rect(x: f64, y: f64, width: f64, height: f64) -> Option<BoundingRect> {
    Some(BoundingRect {
        x,
        y,
        width,
        height,
    })
}

fn element(tag: &str, x: f64, y: f64, w: f64, h: f64, children: Vec<DomNode>) -> DomNode {
    DomNode {
        tag: tag.into(),
        id: None,
        classes: Vec::new(),
        bounds: rect(x, y, w, h),
        padding_top: 0.0,
        padding_left: 0.0,
        content_width: w,
        content_height: h,
        children,
    }
}

/// A two-column page body. A wrapper div around the second column gets
/// collapsed by normalization, so both columns end up as direct children.
fn page() -> DomNode {
    element(
        "body",
        0.0,
        0.0,
        800.0,
        600.0,
        vec![
            element("div", 0.0, 0.0, 400.0, 600.0, Vec::new()),
            element(
                "div",
                400.0,
                0.0,
                400.0,
                600.0,
                vec![element("div", 400.0, 0.0, 400.0, 600.0, Vec::new())],
            ),
        ],
    )
}

fn config() -> BenchConfig {
    BenchConfig {
        height: Bounds {
            low: 600,
            high: 900,
        },
        width: Bounds {
            low: 320,
            high: 1024,
        },
        train_seed: 11,
        train_size: 3,
        test_seed: 12,
        test_size: 2,
    }
}

struct OneConstraintSynth;

#[async_trait]
impl ConstraintSynthesizer for OneConstraintSynth {
    async fn synthesize(
        &self,
        train: &[BoxTree],
        _height: Bounds,
        _width: Bounds,
        _options: &SynthOptions,
    ) -> Result<Vec<Constraint>, HarnessError> {
        Ok(vec![Constraint {
            lhs: "box.width".into(),
            rhs: None,
            a: 0.0,
            b: train[0].width,
            op: boxbench_harness::ComparisonOp::Eq,
            strength: 1000.0,
        }])
    }
}

struct EchoSolver;

#[async_trait]
impl LayoutSolver for EchoSolver {
    async fn solve(
        &self,
        _constraints: &[Constraint],
        test: &[BoxTree],
    ) -> Result<Vec<BoxTree>, HarnessError> {
        Ok(test.to_vec())
    }
}

struct MiscountingSolver;

#[async_trait]
impl LayoutSolver for MiscountingSolver {
    async fn solve(
        &self,
        _constraints: &[Constraint],
        test: &[BoxTree],
    ) -> Result<Vec<BoxTree>, HarnessError> {
        let mut out = test.to_vec();
        out.push(test[0].clone());
        Ok(out)
    }
}

async fn sampled_bench() -> BenchResult {
    let renderer = StaticRenderer::from_snapshot(page());
    let sampler = Sampler::new(renderer, ExtractPolicy::default());
    let config = config();
    let (train, test) = sampler.run("file:///two-column.html", &config).await;
    BenchResult::assemble("two-column", config, train, test).unwrap()
}

#[tokio::test]
async fn sample_persist_reload_evaluate() {
    let bench = sampled_bench().await;
    assert_eq!(bench.train.len(), 3);
    assert_eq!(bench.test.len(), 2);
    // wrapper collapsed: root keeps exactly the two columns
    assert_eq!(bench.train[0].children.len(), 2);
    assert_eq!(bench.train[0].name.as_deref(), Some("box"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two-column.json");
    bench.save(&path).unwrap();
    let loaded = BenchResult::load(&path).unwrap();
    assert_eq!(loaded.train, bench.train);

    let evaluator = Evaluator::new(OneConstraintSynth, EchoSolver);
    let mut metrics = Metrics::new();
    let options = EvalOptions::for_bench(&loaded);
    let reports = evaluator
        .run(&loaded, &options, &mut metrics)
        .await
        .unwrap();

    assert_eq!(reports.len(), 3);
    let last = reports.last().unwrap();
    assert_eq!(last.mean_rms, 0.0);
    assert_eq!(last.accuracy, 1.0);
    assert_eq!(last.node_count, 2 * bench.test[0].size());
}

#[tokio::test]
async fn miscounting_solver_fails_the_evaluation() {
    let bench = sampled_bench().await;
    let evaluator = Evaluator::new(OneConstraintSynth, MiscountingSolver);
    let mut metrics = Metrics::new();
    let options = EvalOptions::for_bench(&bench);

    assert!(matches!(
        evaluator.run(&bench, &options, &mut metrics).await,
        Err(HarnessError::PredictionCountMismatch {
            expected: 2,
            actual: 3
        })
    ));
}
