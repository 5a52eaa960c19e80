use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Requested window dimensions in device-independent pixels. A viewport
/// is a best-effort request to the host environment, not a hard
/// guarantee.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub height: u32,
    pub width: u32,
}

impl Viewport {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// An exclusively-owned browser window, the scoped resource of one
/// capture. Acquired by [`crate::Renderer::open`] and released by
/// [`crate::Renderer::close`] on every exit path.
#[derive(Clone, Debug)]
pub struct WindowHandle {
    pub id: String,
    pub url: String,
    pub viewport: Viewport,
}

impl WindowHandle {
    pub fn new(url: &str, viewport: Viewport) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            viewport,
        }
    }
}
