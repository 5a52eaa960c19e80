//! Structural cleanup passes applied to freshly captured trees.

use crate::model::BoxTree;

/// Collapse redundant single-child wrappers, postorder. A node with
/// exactly one child whose box fully contains the parent's box is replaced
/// by that child, so chains of wrappers cascade away bottom-up.
pub fn flatten(mut tree: BoxTree) -> BoxTree {
    tree.children = tree.children.into_iter().map(flatten).collect();

    if tree.children.len() == 1 {
        let contained = {
            let child = &tree.children[0];
            tree.top <= child.top
                && tree.left <= child.left
                && tree.height <= child.height
                && tree.width <= child.width
        };
        if contained {
            return tree.children.remove(0);
        }
    }
    tree
}

/// Clamp child width/height to the parent's, postorder, repairing
/// measurement noise where a child nominally overflows its parent.
/// Top/left are not clamped, so a child can still sit outside the
/// parent's bounds; that incompleteness is intentional and relied upon by
/// downstream consumers.
pub fn smooth(mut tree: BoxTree) -> BoxTree {
    let parent_width = tree.width;
    let parent_height = tree.height;
    tree.children = tree
        .children
        .into_iter()
        .map(|mut child| {
            child.width = child.width.min(parent_width);
            child.height = child.height.min(parent_height);
            smooth(child)
        })
        .collect();
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper_chain() -> BoxTree {
        // root -> mid -> leaf, where mid's box exactly equals leaf's.
        BoxTree::new(
            Some("root".into()),
            0.0,
            0.0,
            100.0,
            100.0,
            vec![BoxTree::new(
                Some("mid".into()),
                10.0,
                10.0,
                80.0,
                80.0,
                vec![BoxTree::leaf("leaf", 10.0, 10.0, 80.0, 80.0)],
            )],
        )
    }

    #[test]
    fn flatten_collapses_redundant_wrapper() {
        let flattened = flatten(wrapper_chain());
        // mid's box equals leaf's, so the postorder pass collapses mid
        // away; root (100x100) is not contained in leaf (80x80) and stays.
        assert_eq!(flattened.name.as_deref(), Some("root"));
        assert_eq!(flattened.children.len(), 1);
        assert_eq!(flattened.children[0].name.as_deref(), Some("leaf"));
        assert!(flattened.children[0].children.is_empty());
    }

    #[test]
    fn flatten_keeps_wrapper_that_does_not_contain_child() {
        let tree = BoxTree::new(
            Some("root".into()),
            0.0,
            0.0,
            100.0,
            100.0,
            vec![BoxTree::leaf("wide", 0.0, 0.0, 150.0, 50.0)],
        );
        let flattened = flatten(tree);
        // parent.height (100) > child.height (50), so containment fails
        // and the wrapper stays
        assert_eq!(flattened.name.as_deref(), Some("root"));
        assert_eq!(flattened.children.len(), 1);
    }

    #[test]
    fn flatten_is_idempotent() {
        let once = flatten(wrapper_chain());
        let twice = flatten(once.clone());
        assert!(once.same_structure(&twice).is_ok());
        assert_eq!(once, twice);
    }

    #[test]
    fn flatten_ignores_multi_child_nodes() {
        let tree = BoxTree::new(
            Some("root".into()),
            0.0,
            0.0,
            100.0,
            100.0,
            vec![
                BoxTree::leaf("a", 0.0, 0.0, 100.0, 100.0),
                BoxTree::leaf("b", 0.0, 0.0, 100.0, 100.0),
            ],
        );
        assert_eq!(flatten(tree.clone()), tree);
    }

    fn assert_contained(tree: &BoxTree) {
        for child in &tree.children {
            assert!(child.width <= tree.width);
            assert!(child.height <= tree.height);
            assert_contained(child);
        }
    }

    #[test]
    fn smooth_clamps_child_extent_to_parent() {
        let tree = BoxTree::new(
            Some("root".into()),
            0.0,
            0.0,
            100.0,
            100.0,
            vec![BoxTree::new(
                Some("a".into()),
                0.0,
                0.0,
                120.0,
                90.0,
                vec![BoxTree::leaf("aa", 0.0, 0.0, 200.0, 300.0)],
            )],
        );
        let smoothed = smooth(tree);
        assert_contained(&smoothed);
        // clamping happens against the already-clamped parent
        assert_eq!(smoothed.children[0].width, 100.0);
        assert_eq!(smoothed.children[0].children[0].width, 100.0);
        assert_eq!(smoothed.children[0].children[0].height, 90.0);
    }

    #[test]
    fn smooth_leaves_top_left_untouched() {
        let tree = BoxTree::new(
            Some("root".into()),
            0.0,
            0.0,
            50.0,
            50.0,
            vec![BoxTree::leaf("out", -10.0, 200.0, 20.0, 20.0)],
        );
        let smoothed = smooth(tree);
        assert_eq!(smoothed.children[0].top, -10.0);
        assert_eq!(smoothed.children[0].left, 200.0);
    }
}
