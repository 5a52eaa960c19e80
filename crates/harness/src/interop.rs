//! Conversion between [`BoxTree`] and the collaborator wire shape, which
//! carries rectangles as `[left, top, right, bottom]` quadruples.

use boxbench_tree::BoxTree;
use serde::{Deserialize, Serialize};

use crate::errors::HarnessError;

pub const UNTITLED: &str = "untitled";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireTree {
    pub name: String,
    pub rect: [f64; 4],
    #[serde(default)]
    pub children: Vec<WireTree>,
}

/// Encode a (named) tree for the collaborators. Trees with negative
/// extents are rejected: the constraint vocabulary is undefined over
/// them.
pub fn to_wire(tree: &BoxTree) -> Result<WireTree, HarnessError> {
    if tree.width < 0.0 || tree.height < 0.0 {
        return Err(HarnessError::NegativeExtent {
            name: tree.name.clone(),
        });
    }
    let children = tree
        .children
        .iter()
        .map(to_wire)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(WireTree {
        name: tree
            .name
            .clone()
            .unwrap_or_else(|| UNTITLED.to_string()),
        rect: [tree.left, tree.top, tree.right(), tree.bottom()],
        children,
    })
}

/// Decode a collaborator tree. An inverted rect (`right < left` or
/// `bottom < top`) would produce a box with negative extent, so it is
/// rejected the same way [`to_wire`] rejects one.
pub fn from_wire(wire: &WireTree) -> Result<BoxTree, HarnessError> {
    let [left, top, right, bottom] = wire.rect;
    if right < left || bottom < top {
        return Err(HarnessError::NegativeExtent {
            name: Some(wire.name.clone()),
        });
    }
    let children = wire
        .children
        .iter()
        .map(from_wire)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BoxTree::new(
        Some(wire.name.clone()),
        top,
        left,
        right - left,
        bottom - top,
        children,
    ))
}
