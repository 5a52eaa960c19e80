//! Deterministic preorder naming.
//!
//! Trees captured at different viewport sizes must assign the same name
//! to corresponding nodes even when the page markup carries no ids, so
//! that node-keyed variables (e.g. `box3.width`) read consistently across
//! captures. Names derive purely from tree shape and position: an unnamed
//! node takes its prefix, and child `i` extends the parent's name with
//! the zero-based index.

use crate::model::BoxTree;

pub const DEFAULT_PREFIX: &str = "box";

/// Name the tree with the default `box` prefix. Idempotent: nodes that
/// already carry a name (from a DOM id or a previous pass) keep it.
pub fn name_tree(tree: &mut BoxTree) {
    name_tree_with_prefix(tree, DEFAULT_PREFIX);
}

pub fn name_tree_with_prefix(tree: &mut BoxTree, prefix: &str) {
    if tree.name.is_none() {
        tree.name = Some(prefix.to_string());
    }
    let base = tree.name.clone().unwrap_or_default();
    for (index, child) in tree.children.iter_mut().enumerate() {
        name_tree_with_prefix(child, &format!("{base}{index}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unnamed(top: f64, children: Vec<BoxTree>) -> BoxTree {
        BoxTree::new(None, top, 0.0, 10.0, 10.0, children)
    }

    #[test]
    fn names_follow_preorder_positions() {
        let mut tree = unnamed(
            0.0,
            vec![
                unnamed(1.0, vec![unnamed(2.0, vec![]), unnamed(3.0, vec![])]),
                unnamed(4.0, vec![]),
            ],
        );
        name_tree(&mut tree);
        assert_eq!(tree.name.as_deref(), Some("box"));
        assert_eq!(tree.children[0].name.as_deref(), Some("box0"));
        assert_eq!(tree.children[1].name.as_deref(), Some("box1"));
        assert_eq!(tree.children[0].children[0].name.as_deref(), Some("box00"));
        assert_eq!(tree.children[0].children[1].name.as_deref(), Some("box01"));
    }

    #[test]
    fn two_identical_shapes_get_identical_names() {
        let make = || unnamed(0.0, vec![unnamed(1.0, vec![]), unnamed(2.0, vec![])]);
        let (mut a, mut b) = (make(), make());
        name_tree(&mut a);
        name_tree(&mut b);
        assert!(a.same_structure(&b).is_ok());
    }

    #[test]
    fn naming_is_idempotent() {
        let mut tree = unnamed(0.0, vec![unnamed(1.0, vec![])]);
        name_tree(&mut tree);
        let named = tree.clone();
        name_tree(&mut tree);
        assert_eq!(tree, named);
    }

    #[test]
    fn existing_ids_are_kept_and_prefix_children() {
        let mut tree = unnamed(
            0.0,
            vec![BoxTree::new(
                Some("header".into()),
                1.0,
                0.0,
                10.0,
                10.0,
                vec![unnamed(2.0, vec![])],
            )],
        );
        name_tree(&mut tree);
        assert_eq!(tree.children[0].name.as_deref(), Some("header"));
        assert_eq!(
            tree.children[0].children[0].name.as_deref(),
            Some("header0")
        );
    }
}
