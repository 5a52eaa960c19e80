//! HTTP client for the external synthesis/solving service.

use async_trait::async_trait;
use boxbench_harness::interop::{from_wire, to_wire, WireTree};
use boxbench_harness::{
    Bounds, Constraint, ConstraintSynthesizer, HarnessError, LayoutSolver, SynthOptions,
};
use boxbench_tree::BoxTree;
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct BoundsPayload {
    height: Bounds,
    width: Bounds,
}

#[derive(Serialize)]
struct SynthesizeRequest {
    examples: Vec<WireTree>,
    bounds: BoundsPayload,
    options: SynthOptionsPayload,
}

#[derive(Serialize)]
struct SynthOptionsPayload {
    variant: boxbench_harness::SynthVariant,
    learner: boxbench_harness::LocalLearner,
}

#[derive(Serialize)]
struct SolveRequest<'a> {
    constraints: &'a [Constraint],
    examples: Vec<WireTree>,
}

/// Speaks the mockdown-style JSON API: `POST /api/synthesize` with the
/// training examples and bounds, `POST /api/solve` with the constraint
/// set and the test roots to pin.
#[derive(Clone)]
pub struct MockdownHttp {
    client: reqwest::Client,
    base: String,
}

impl MockdownHttp {
    pub fn new(base: &str) -> Result<Self, HarnessError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| HarnessError::collaborator(format!("http client setup: {e}")))?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, HarnessError>
    where
        B: Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base);
        debug!(%url, "calling collaborator");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| HarnessError::collaborator(format!("{url}: {e}")))?;
        if !response.status().is_success() {
            return Err(HarnessError::collaborator(format!(
                "{url}: status {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| HarnessError::collaborator(format!("{url}: bad response body: {e}")))
    }
}

#[async_trait]
impl ConstraintSynthesizer for MockdownHttp {
    async fn synthesize(
        &self,
        train: &[BoxTree],
        height: Bounds,
        width: Bounds,
        options: &SynthOptions,
    ) -> Result<Vec<Constraint>, HarnessError> {
        let examples = train.iter().map(to_wire).collect::<Result<Vec<_>, _>>()?;
        let request = SynthesizeRequest {
            examples,
            bounds: BoundsPayload { height, width },
            options: SynthOptionsPayload {
                variant: options.variant,
                learner: options.learner,
            },
        };
        self.post("api/synthesize", &request).await
    }
}

#[async_trait]
impl LayoutSolver for MockdownHttp {
    async fn solve(
        &self,
        constraints: &[Constraint],
        test: &[BoxTree],
    ) -> Result<Vec<BoxTree>, HarnessError> {
        let examples = test.iter().map(to_wire).collect::<Result<Vec<_>, _>>()?;
        let request = SolveRequest {
            constraints,
            examples,
        };
        let solved: Vec<WireTree> = self.post("api/solve", &request).await?;
        solved.iter().map(from_wire).collect()
    }
}
