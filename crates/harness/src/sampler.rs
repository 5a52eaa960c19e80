//! Seeded viewport sampling and the sequential capture loop.

use boxbench_tree::{flatten, smooth, BoxTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use render_adapter::{ExtractPolicy, Renderer, Viewport};
use tracing::{debug, warn};

use crate::config::{BenchConfig, Bounds};
use crate::errors::HarnessError;

/// Drives repeated captures of one page across seeded random viewport
/// sizes to build the train and test splits.
///
/// Captures run strictly one at a time: each exclusively owns a browser
/// window for its duration, and the window is closed on every exit path.
pub struct Sampler<R: Renderer> {
    renderer: R,
    policy: ExtractPolicy,
    smooth: bool,
}

impl<R: Renderer> Sampler<R> {
    pub fn new(renderer: R, policy: ExtractPolicy) -> Self {
        Self {
            renderer,
            policy,
            smooth: false,
        }
    }

    /// Also clamp child overflow (`smooth`) after the mandatory `flatten`
    /// pass on each captured tree.
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    /// Deterministic viewport draws: `low + randint(0, high - low)` for
    /// height then width, one seeded generator per split. Identical seed
    /// and bounds always reproduce the same sequence.
    pub fn draw_viewports(
        seed: u64,
        count: usize,
        height: &Bounds,
        width: &Bounds,
    ) -> Vec<Viewport> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let h = draw_dimension(&mut rng, height);
                let w = draw_dimension(&mut rng, width);
                Viewport::new(h, w)
            })
            .collect()
    }

    /// Capture both splits for `url` per the config. Failed captures are
    /// dropped (the split may come up short of the requested size); the
    /// caller assembles and validates the resulting benchmark.
    pub async fn run(
        &self,
        url: &str,
        config: &BenchConfig,
    ) -> (Vec<BoxTree>, Vec<BoxTree>) {
        let train = self
            .capture_split(url, config.train_seed, config.train_size, config)
            .await;
        let test = self
            .capture_split(url, config.test_seed, config.test_size, config)
            .await;
        (train, test)
    }

    async fn capture_split(
        &self,
        url: &str,
        seed: u64,
        count: usize,
        config: &BenchConfig,
    ) -> Vec<BoxTree> {
        let viewports = Self::draw_viewports(seed, count, &config.height, &config.width);
        let mut trees = Vec::with_capacity(count);
        for viewport in viewports {
            match self.capture(url, viewport).await {
                Ok(tree) => trees.push(tree),
                Err(err) => warn!(%viewport, %err, "capture failed; dropping sample"),
            }
        }
        trees
    }

    /// One capture: open a sized window, extract, always close, then run
    /// the normalization passes.
    pub async fn capture(
        &self,
        url: &str,
        viewport: Viewport,
    ) -> Result<BoxTree, HarnessError> {
        let handle = self.renderer.open(url, viewport).await?;
        debug!(window = %handle.id, %viewport, "window open, extracting");
        let extracted = self.renderer.extract(&handle, &self.policy).await;
        if let Err(err) = self.renderer.close(handle).await {
            warn!(%err, "failed to close capture window");
        }
        let tree = flatten(extracted?);
        Ok(if self.smooth { smooth(tree) } else { tree })
    }
}

fn draw_dimension(rng: &mut StdRng, bounds: &Bounds) -> u32 {
    if bounds.span() == 0 {
        bounds.low
    } else {
        bounds.low + rng.gen_range(0..bounds.span())
    }
}
