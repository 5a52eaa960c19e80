//! DOM-to-box-tree extraction: a single top-down pass over a rendered
//! snapshot.

use std::collections::HashSet;

use boxbench_tree::BoxTree;

use crate::errors::CaptureError;
use crate::model::DomNode;

/// Extraction policy knobs.
///
/// `excluded_tags` drops an element's own box along with its entire
/// subtree. The default set (paragraphs, headings, rules) reproduces the
/// historical "ignore text content" heuristic; it is held here as
/// configuration rather than hard-coded because the drop-the-whole-box
/// behavior may be more aggressive than intended.
///
/// `opaque_classes` marks elements whose internal structure should not be
/// decomposed: they are kept as single leaves.
#[derive(Clone, Debug)]
pub struct ExtractPolicy {
    pub excluded_tags: HashSet<String>,
    pub opaque_classes: HashSet<String>,
}

impl Default for ExtractPolicy {
    fn default() -> Self {
        let excluded_tags = ["p", "h1", "h2", "h3", "h4", "h5", "h6", "hr"]
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            excluded_tags,
            opaque_classes: HashSet::new(),
        }
    }
}

impl ExtractPolicy {
    pub fn with_opaque_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opaque_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    fn is_excluded(&self, node: &DomNode) -> bool {
        self.excluded_tags.contains(&node.tag.to_lowercase())
    }

    fn is_opaque(&self, node: &DomNode) -> bool {
        node.classes
            .iter()
            .any(|class| self.opaque_classes.contains(class))
    }
}

/// Convert a rendered element subtree into a [`BoxTree`].
///
/// The produced box describes the element's content box: the border-box
/// position is shifted by the element's own top/left padding, and
/// width/height come from the computed content-box dimensions rather than
/// the bounding rect. Children are visited in DOM order; invisible
/// children are skipped, excluded tags are dropped subtree-and-all, and
/// opaque elements become leaves. An opaque element turns into a leaf
/// before its descendants are visited, so descendants of an opaque
/// ancestor never reach the policy checks.
///
/// The snapshot is not mutated. A root without reported bounds aborts the
/// capture with [`CaptureError::MissingBounds`].
pub fn mockify(root: &DomNode, policy: &ExtractPolicy) -> Result<BoxTree, CaptureError> {
    let mut tree = own_box(root)?;

    for child in &root.children {
        if !child.is_visible() {
            continue;
        }
        if policy.is_excluded(child) {
            continue;
        }
        if policy.is_opaque(child) {
            tree.children.push(own_box(child)?);
            continue;
        }
        tree.children.push(mockify(child, policy)?);
    }

    Ok(tree)
}

/// The element's own box, children left empty: content-box position and
/// dimensions, named by the element id when present.
fn own_box(node: &DomNode) -> Result<BoxTree, CaptureError> {
    let bounds = node.bounds.as_ref().ok_or_else(|| CaptureError::MissingBounds {
        tag: node.tag.clone(),
    })?;
    Ok(BoxTree::new(
        node.id.clone(),
        bounds.y + node.padding_top,
        bounds.x + node.padding_left,
        node.content_width,
        node.content_height,
        Vec::new(),
    ))
}
