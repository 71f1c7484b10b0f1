use crate::NodeHeight;

/// A single tree node owning its left and right subtrees.
///
/// Every node is owned by exactly one parent edge, or by the tree's root
/// slot. There are no parent back-pointers; no operation walks upward.
#[derive(Debug, Clone)]
pub struct Node<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    pub(crate) value: V,
    pub(crate) left: Option<Box<Node<V>>>,
    pub(crate) right: Option<Box<Node<V>>>,
}

impl<V> Node<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }

    /// A node with both child edges absent.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted at this node: the longest edge path
    /// down to a leaf. A leaf has height 0.
    pub fn height(&self) -> NodeHeight {
        1 + subtree_height(self.left()).max(subtree_height(self.right()))
    }

    /// Leftmost node of this subtree, which holds its minimum value.
    pub(crate) fn min(&self) -> &Node<V> {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }
}

/// Height of an optional subtree. Absent subtrees have height -1.
pub(crate) fn subtree_height<V>(node: Option<&Node<V>>) -> NodeHeight
where
    V: Ord + Clone + std::fmt::Display,
{
    node.map_or(-1, Node::height)
}
