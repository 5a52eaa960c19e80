use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{StructureMismatch, TreeError};

/// A rectangle with an optional name and ordered children; the unit of a
/// layout tree. Child order mirrors DOM order and is semantically
/// significant. Invariant: `width >= 0` and `height >= 0`.
///
/// The four geometry fields are mandatory in the persisted JSON form;
/// deserialization fails if any of them is missing on any node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub children: Vec<BoxTree>,
}

impl BoxTree {
    pub fn new(
        name: Option<String>,
        top: f64,
        left: f64,
        width: f64,
        height: f64,
        children: Vec<BoxTree>,
    ) -> Self {
        Self {
            name,
            top,
            left,
            width,
            height,
            children,
        }
    }

    /// Leaf constructor, mostly useful in tests and fixtures.
    pub fn leaf(name: &str, top: f64, left: f64, width: f64, height: f64) -> Self {
        Self::new(Some(name.to_string()), top, left, width, height, Vec::new())
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Total node count of the subtree. A node counts once; aggregate
    /// metrics that care about the four geometric attributes multiply by
    /// four explicitly (see [`BoxTree::rms`]).
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(BoxTree::size).sum::<usize>()
    }

    /// Sum of squared differences of the four geometric fields against a
    /// same-position node. Pure, no recursion.
    pub fn squared_geometric_diff(&self, other: &BoxTree) -> f64 {
        (self.left - other.left).powi(2)
            + (self.top - other.top).powi(2)
            + (self.width - other.width).powi(2)
            + (self.height - other.height).powi(2)
    }

    /// Recursive squared geometric error. Fails with
    /// [`TreeError::ShapeMismatch`] when the trees have differing child
    /// counts at any level; the comparison is undefined in that case.
    pub fn squared_error(&self, other: &BoxTree) -> Result<f64, TreeError> {
        if self.children.len() != other.children.len() {
            return Err(TreeError::ShapeMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        let mut residual = self.squared_geometric_diff(other);
        for (child, other_child) in self.children.iter().zip(&other.children) {
            residual += child.squared_error(other_child)?;
        }
        Ok(residual)
    }

    /// Root-mean-square positional/size error per geometric attribute per
    /// node: `sqrt(squared_error / (4 * size))`.
    pub fn rms(&self, other: &BoxTree) -> Result<f64, TreeError> {
        let err = self.squared_error(other)?;
        Ok((err / (4.0 * self.size() as f64)).sqrt())
    }

    /// L1 distance of the four geometric fields at this node. Pure.
    pub fn absolute_diff(&self, other: &BoxTree) -> f64 {
        (self.left - other.left).abs()
            + (self.top - other.top).abs()
            + (self.width - other.width).abs()
            + (self.height - other.height).abs()
    }

    /// Recursive L1 error, a less outlier-sensitive companion to
    /// [`BoxTree::rms`]. Same shape-mismatch failure mode.
    pub fn pixel_diff(&self, other: &BoxTree) -> Result<f64, TreeError> {
        if self.children.len() != other.children.len() {
            return Err(TreeError::ShapeMismatch {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        let mut diff = self.absolute_diff(other);
        for (child, other_child) in self.children.iter().zip(&other.children) {
            diff += child.pixel_diff(other_child)?;
        }
        Ok(diff)
    }

    /// Count of nodes whose four geometric fields are exactly equal at the
    /// same structural position. Assumes isomorphic inputs (surplus
    /// children on either side are ignored); callers validate shape first.
    pub fn identical_placement(&self, other: &BoxTree) -> usize {
        let here = usize::from(
            self.left == other.left
                && self.top == other.top
                && self.width == other.width
                && self.height == other.height,
        );
        here + self
            .children
            .iter()
            .zip(&other.children)
            .map(|(child, other_child)| child.identical_placement(other_child))
            .sum::<usize>()
    }

    /// Structural isomorphism check: equal name and equal child count at
    /// every corresponding position, independent of geometry. On failure
    /// reports the first preorder divergence.
    pub fn same_structure(&self, other: &BoxTree) -> Result<(), StructureMismatch> {
        self.check_structure(other, &self.display_name())
    }

    fn check_structure(&self, other: &BoxTree, path: &str) -> Result<(), StructureMismatch> {
        if self.name != other.name || self.children.len() != other.children.len() {
            return Err(StructureMismatch {
                path: path.to_string(),
                expected: self.name.clone(),
                actual: other.name.clone(),
            });
        }
        for (child, other_child) in self.children.iter().zip(&other.children) {
            let child_path = format!("{path}/{}", child.display_name());
            child.check_structure(other_child, &child_path)?;
        }
        Ok(())
    }

    fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "?".to_string())
    }

    /// Pruned copy keeping only the direct children whose names appear in
    /// `keep` (each with its full subtree). Used to focus evaluation on a
    /// subset of layout regions.
    pub fn filter_names(&self, keep: &HashSet<String>) -> BoxTree {
        let children = self
            .children
            .iter()
            .filter(|child| child.name.as_ref().is_some_and(|name| keep.contains(name)))
            .cloned()
            .collect();
        BoxTree {
            name: self.name.clone(),
            top: self.top,
            left: self.left,
            width: self.width,
            height: self.height,
            children,
        }
    }

    /// Preorder search for the first node with a matching name.
    pub fn find(&self, name: &str) -> Option<&BoxTree> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }
}

impl fmt::Display for BoxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LT: {}, {},  WH: {}, {}",
            self.left, self.top, self.width, self.height
        )
    }
}
