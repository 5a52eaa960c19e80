use serde::{Deserialize, Serialize};

/// Viewport-relative border-box rectangle reported by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One rendered element as the renderer reports it: tag, attributes that
/// matter to extraction, the border-box bounding rect (absent when the
/// browser cannot report bounds) and the computed-style content box.
///
/// Serde-derived so snapshot documents double as headless test and CLI
/// fixtures.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<BoundingRect>,
    #[serde(default)]
    pub padding_top: f64,
    #[serde(default)]
    pub padding_left: f64,
    pub content_width: f64,
    pub content_height: f64,
    #[serde(default)]
    pub children: Vec<DomNode>,
}

impl DomNode {
    /// Invisible elements contribute nothing to the extracted tree: no
    /// reported bounds, or a degenerate extent.
    pub fn is_visible(&self) -> bool {
        self.bounds
            .is_some_and(|rect| rect.width != 0.0 && rect.height != 0.0)
    }
}
