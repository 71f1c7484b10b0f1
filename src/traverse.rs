use std::collections::VecDeque;

use crate::node::Node;

/// The visit orders supported by [`crate::Tree::walk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Left subtree, node, right subtree. Visits values in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
    /// Breadth-first from the root, left child before right.
    LevelOrder,
}

pub(crate) fn in_order<V>(node: Option<&Node<V>>, visitor: &mut dyn FnMut(&Node<V>))
where
    V: Ord + Clone + std::fmt::Display,
{
    if let Some(node) = node {
        in_order(node.left(), visitor);
        visitor(node);
        in_order(node.right(), visitor);
    }
}

pub(crate) fn pre_order<V>(node: Option<&Node<V>>, visitor: &mut dyn FnMut(&Node<V>))
where
    V: Ord + Clone + std::fmt::Display,
{
    if let Some(node) = node {
        visitor(node);
        pre_order(node.left(), visitor);
        pre_order(node.right(), visitor);
    }
}

pub(crate) fn post_order<V>(node: Option<&Node<V>>, visitor: &mut dyn FnMut(&Node<V>))
where
    V: Ord + Clone + std::fmt::Display,
{
    if let Some(node) = node {
        post_order(node.left(), visitor);
        post_order(node.right(), visitor);
        visitor(node);
    }
}

pub(crate) fn level_order<V>(root: Option<&Node<V>>, visitor: &mut dyn FnMut(&Node<V>))
where
    V: Ord + Clone + std::fmt::Display,
{
    // Seed the queue only when a root is present, so an empty tree never
    // enqueues an absent entry
    let mut queue: VecDeque<&Node<V>> = root.into_iter().collect();

    while let Some(node) = queue.pop_front() {
        visitor(node);

        if let Some(left) = node.left() {
            queue.push_back(left);
        }
        if let Some(right) = node.right() {
            queue.push_back(right);
        }
    }
}
