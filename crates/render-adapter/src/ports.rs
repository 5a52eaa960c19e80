//! The capture capability boundary.
//!
//! The harness core never touches a browser directly: it talks to a
//! [`Renderer`], so box-tree extraction, validation and evaluation are
//! testable headlessly against synthetic snapshots.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use boxbench_tree::BoxTree;
use tracing::debug;

use crate::errors::CaptureError;
use crate::extract::{mockify, ExtractPolicy};
use crate::model::DomNode;
use crate::window::{Viewport, WindowHandle};

/// Provisions browser windows and extracts box trees from them.
///
/// `open` acquires an exclusively-owned window sized to the requested
/// viewport and waits for the page's ready signal, bounded by an
/// implementation-configured timeout. A timed-out wait is not an error:
/// extraction proceeds best-effort against whatever is rendered.
/// Implementations must make `close` safe to call on every exit path.
#[async_trait]
pub trait Renderer: Send + Sync {
    async fn open(&self, url: &str, viewport: Viewport) -> Result<WindowHandle, CaptureError>;

    async fn extract(
        &self,
        handle: &WindowHandle,
        policy: &ExtractPolicy,
    ) -> Result<BoxTree, CaptureError>;

    async fn close(&self, handle: WindowHandle) -> Result<(), CaptureError>;
}

/// Fixture-backed renderer serving pre-recorded [`DomNode`] snapshots,
/// keyed by viewport with an optional fallback document used at any
/// size. Stands in for the browser-backed adapter in tests and sanity
/// runs.
#[derive(Default)]
pub struct StaticRenderer {
    snapshots: HashMap<Viewport, DomNode>,
    fallback: Option<DomNode>,
    open_windows: Mutex<HashMap<String, Viewport>>,
}

impl StaticRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve one document regardless of the requested viewport.
    pub fn from_snapshot(snapshot: DomNode) -> Self {
        Self {
            fallback: Some(snapshot),
            ..Self::default()
        }
    }

    pub fn insert(&mut self, viewport: Viewport, snapshot: DomNode) {
        self.snapshots.insert(viewport, snapshot);
    }

    fn snapshot_for(&self, viewport: Viewport) -> Result<&DomNode, CaptureError> {
        self.snapshots
            .get(&viewport)
            .or(self.fallback.as_ref())
            .ok_or(CaptureError::NoSnapshot(viewport))
    }
}

#[async_trait]
impl Renderer for StaticRenderer {
    async fn open(&self, url: &str, viewport: Viewport) -> Result<WindowHandle, CaptureError> {
        let handle = WindowHandle::new(url, viewport);
        debug!(window = %handle.id, %viewport, "opening fixture window");
        self.open_windows
            .lock()
            .map_err(|_| CaptureError::renderer("window registry poisoned"))?
            .insert(handle.id.clone(), viewport);
        Ok(handle)
    }

    async fn extract(
        &self,
        handle: &WindowHandle,
        policy: &ExtractPolicy,
    ) -> Result<BoxTree, CaptureError> {
        let known = self
            .open_windows
            .lock()
            .map_err(|_| CaptureError::renderer("window registry poisoned"))?
            .contains_key(&handle.id);
        if !known {
            return Err(CaptureError::UnknownWindow(handle.id.clone()));
        }
        let snapshot = self.snapshot_for(handle.viewport)?;
        mockify(snapshot, policy)
    }

    async fn close(&self, handle: WindowHandle) -> Result<(), CaptureError> {
        debug!(window = %handle.id, "closing fixture window");
        self.open_windows
            .lock()
            .map_err(|_| CaptureError::renderer("window registry poisoned"))?
            .remove(&handle.id);
        Ok(())
    }
}
