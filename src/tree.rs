use tracing::{debug, error};

use crate::{
    builder::TreeBuilder,
    iterator::Iter,
    node::{subtree_height, Node},
    traverse, NodeDepth, NodeHeight, Traversal, TreeError,
};

/// A binary search tree owning its root node.
///
/// Values order left-strictly-less / right-greater-or-equal, so equal
/// values inserted after construction collapse toward the right branch.
/// Mutations never restructure the tree; [`Tree::rebalance`] restores
/// minimal height on demand by rebuilding from the in-order sequence.
#[derive(Debug, Clone)]
pub struct Tree<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    root: Option<Box<Node<V>>>,
}

impl<V> Tree<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a minimal-height tree from an arbitrary sequence of values.
    ///
    /// The input may be unsorted and may contain duplicates; the tree holds
    /// exactly the distinct values and is balanced on return.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        TreeBuilder::new().values(values).done()
    }

    pub(crate) fn from_root(root: Option<Box<Node<V>>>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` as a new leaf at its search position.
    ///
    /// Equal values route right at every comparison, so duplicates are
    /// accepted. The tree is not rebalanced: repeated monotone insertion
    /// degrades it toward a list until [`Tree::rebalance`] is called.
    pub fn insert(&mut self, value: V) {
        debug!("Inserting {}", value);

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if node.value > value {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *slot = Some(Box::new(Node::new(value)));
    }

    /// Removes the node holding `value`. A no-op when the value is absent.
    ///
    /// A node with two children is replaced by its in-order successor, the
    /// minimum of its right subtree.
    pub fn delete(&mut self, value: &V) {
        debug!("Deleting {}", value);
        self.root = remove(self.root.take(), value);
    }

    /// Finds the node holding `value` by iterative descent.
    pub fn find(&self, value: &V) -> Option<&Node<V>> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            if node.value > *value {
                current = node.left.as_deref();
            } else if node.value < *value {
                current = node.right.as_deref();
            } else {
                return Some(node);
            }
        }

        None
    }

    /// Number of edges between the root and the node holding `value`, or
    /// `None` when the value is absent. The root has depth 0.
    pub fn depth(&self, value: &V) -> Option<NodeDepth> {
        let mut current = self.root.as_deref();
        let mut count = 0;

        while let Some(node) = current {
            if node.value > *value {
                count += 1;
                current = node.left.as_deref();
            } else if node.value < *value {
                count += 1;
                current = node.right.as_deref();
            } else {
                return Some(count);
            }
        }

        None
    }

    /// Height of the subtree rooted at the node holding `value`, or `None`
    /// when the value is absent.
    pub fn height(&self, value: &V) -> Option<NodeHeight> {
        self.find(value).map(Node::height)
    }

    /// Visits every node in ascending value order.
    pub fn in_order<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<V>),
    {
        traverse::in_order(self.root(), &mut visitor);
    }

    /// Visits every node, each before its subtrees.
    pub fn pre_order<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<V>),
    {
        traverse::pre_order(self.root(), &mut visitor);
    }

    /// Visits every node, each after its subtrees.
    pub fn post_order<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<V>),
    {
        traverse::post_order(self.root(), &mut visitor);
    }

    /// Visits every node breadth-first, shallower nodes before deeper ones
    /// and left children before right children.
    pub fn level_order<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node<V>),
    {
        traverse::level_order(self.root(), &mut visitor);
    }

    /// Traverses the tree in the given order with an optional visitor.
    ///
    /// Unlike the typed visitor methods, the callback may be absent here;
    /// its absence fails fast with [`TreeError::MissingVisitor`] before any
    /// node is visited.
    pub fn walk(
        &self,
        order: Traversal,
        visitor: Option<&mut dyn FnMut(&Node<V>)>,
    ) -> Result<(), TreeError> {
        let Some(visitor) = visitor else {
            error!("{:?} traversal requested without a visitor", order);
            return Err(TreeError::MissingVisitor);
        };

        match order {
            Traversal::InOrder => traverse::in_order(self.root(), visitor),
            Traversal::PreOrder => traverse::pre_order(self.root(), visitor),
            Traversal::PostOrder => traverse::post_order(self.root(), visitor),
            Traversal::LevelOrder => traverse::level_order(self.root(), visitor),
        }

        Ok(())
    }

    /// In-order iterator over the tree's nodes.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self.root())
    }

    /// Clones every value out of the tree, in ascending order.
    pub fn values(&self) -> Vec<V> {
        self.iter().map(|node| node.value().clone()).collect()
    }

    /// True when every node's child subtrees differ in height by at most 1,
    /// checked recursively at every level.
    pub fn is_balanced(&self) -> bool {
        balanced(self.root())
    }

    /// Rebuilds the tree to minimal height when it is unbalanced.
    ///
    /// The rebuild feeds the in-order value sequence back through the
    /// construction path, so duplicate values that entered through
    /// [`Tree::insert`] collapse to a single node.
    pub fn rebalance(&mut self) {
        if self.is_balanced() {
            debug!("Tree already balanced, nothing to do");
            return;
        }

        let values = self.values();
        debug!("Rebuilding tree from {} values", values.len());
        *self = Tree::from_values(values);
    }
}

impl<V> Default for Tree<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<V> for Tree<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Tree::from_values(iter)
    }
}

impl<'a, V> IntoIterator for &'a Tree<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    type Item = &'a Node<V>;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Removes `value` from the subtree, returning the replacement subtree root.
fn remove<V>(node: Option<Box<Node<V>>>, value: &V) -> Option<Box<Node<V>>>
where
    V: Ord + Clone + std::fmt::Display,
{
    let mut node = node?;

    if node.value > *value {
        node.left = remove(node.left.take(), value);
    } else if node.value < *value {
        node.right = remove(node.right.take(), value);
    } else {
        match (node.left.take(), node.right.take()) {
            (None, None) => return None,
            (Some(child), None) | (None, Some(child)) => return Some(child),
            (Some(left), Some(right)) => {
                // Promote the in-order successor, then delete it from the
                // right subtree where it has at most one child
                let successor = right.min().value().clone();
                node.left = Some(left);
                node.right = remove(Some(right), &successor);
                node.value = successor;
            }
        }
    }

    Some(node)
}

fn balanced<V>(node: Option<&Node<V>>) -> bool
where
    V: Ord + Clone + std::fmt::Display,
{
    let Some(node) = node else {
        return true;
    };

    let left = subtree_height(node.left());
    let right = subtree_height(node.right());

    (left - right).abs() <= 1 && balanced(node.left()) && balanced(node.right())
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    fn scenario_tree() -> Tree<i32> {
        Tree::from_values([4, 5, 8, 9, 12, 54, 22, 11, 14, 17])
    }

    #[test]
    fn insert_into_empty_tree_sets_root() {
        let mut tree = Tree::new();
        tree.insert(10);

        assert_eq!(tree.root().map(|n| *n.value()), Some(10));
        assert!(tree.root().unwrap().is_leaf());
    }

    #[test]
    fn insert_routes_duplicates_right() {
        let mut tree = Tree::new();
        tree.insert(10);
        tree.insert(10);

        let root = tree.root().unwrap();
        assert!(root.left().is_none());
        assert_eq!(root.right().map(|n| *n.value()), Some(10));
    }

    #[test]
    fn monotone_insertion_unbalances() {
        let mut tree = Tree::new();
        for value in 1..=3 {
            tree.insert(value);
        }

        assert!(!tree.is_balanced());
        assert_eq!(tree.depth(&3), Some(2));
    }

    #[test]
    fn delete_leaf() {
        let mut tree = scenario_tree();
        tree.delete(&4);

        assert_eq!(tree.find(&4).map(|n| *n.value()), None);
        assert_eq!(tree.values(), vec![5, 8, 9, 11, 12, 14, 17, 22, 54]);
    }

    #[test]
    fn delete_node_with_one_child_splices() {
        let mut tree = scenario_tree();
        // 5 holds only a left child (4)
        tree.delete(&5);

        assert!(tree.find(&5).is_none());
        assert_eq!(tree.depth(&4), Some(2));
        assert_eq!(tree.values(), vec![4, 8, 9, 11, 12, 14, 17, 22, 54]);
    }

    #[test]
    fn delete_node_with_two_children_promotes_successor() {
        let mut tree = scenario_tree();
        // 8 holds both 5 and 11; its in-order successor is 9
        tree.delete(&8);

        assert!(tree.find(&8).is_none());
        assert_eq!(tree.depth(&9), Some(1));
        assert_eq!(tree.values(), vec![4, 5, 9, 11, 12, 14, 17, 22, 54]);
    }

    #[test]
    fn delete_root_promotes_successor() {
        let mut tree = scenario_tree();
        tree.delete(&12);

        assert_eq!(tree.depth(&14), Some(0));
        assert_eq!(tree.values(), vec![4, 5, 8, 9, 11, 14, 17, 22, 54]);
    }

    #[test]
    fn delete_absent_value_is_noop() {
        let mut tree = scenario_tree();
        let before = tree.values();
        tree.delete(&999);

        assert_eq!(tree.values(), before);
    }

    #[test]
    fn find_reports_absence() {
        let tree = scenario_tree();

        assert_eq!(tree.find(&12).map(|n| *n.value()), Some(12));
        assert!(tree.find(&999).is_none());
    }

    #[test]
    fn depth_counts_edges_from_root() {
        let tree = scenario_tree();

        assert_eq!(tree.depth(&12), Some(0));
        assert_eq!(tree.depth(&8), Some(1));
        assert_eq!(tree.depth(&4), Some(3));
        assert_eq!(tree.depth(&999), None);
    }

    #[test]
    fn height_counts_edges_to_deepest_leaf() {
        let tree = scenario_tree();

        assert_eq!(tree.height(&12), Some(3));
        assert_eq!(tree.height(&4), Some(0));
        assert_eq!(tree.height(&999), None);
    }

    #[test]
    fn ordering_holds_after_mutations() {
        let mut tree = scenario_tree();
        tree.insert(13);
        tree.insert(7);
        tree.delete(&9);
        tree.delete(&54);
        tree.insert(2);

        let values = tree.values();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[traced_test]
    #[test]
    fn rebalance_restores_minimal_height() {
        let mut tree = scenario_tree();
        for value in [77, 78, 79, 80] {
            tree.insert(value);
        }
        assert!(!tree.is_balanced());

        tree.rebalance();

        assert!(tree.is_balanced());
        assert_eq!(
            tree.values(),
            vec![4, 5, 8, 9, 11, 12, 14, 17, 22, 54, 77, 78, 79, 80]
        );
        assert_eq!(tree.root().map(|root| root.height()), Some(3));
    }

    #[test]
    fn rebalance_is_idempotent() {
        let mut tree = scenario_tree();
        for value in [77, 78, 79, 80] {
            tree.insert(value);
        }

        tree.rebalance();
        let mut shape = Vec::new();
        tree.pre_order(|node| shape.push(*node.value()));

        // Already balanced: the second call must not restructure
        tree.rebalance();
        let mut shape_after = Vec::new();
        tree.pre_order(|node| shape_after.push(*node.value()));

        assert_eq!(shape, shape_after);
    }

    #[test]
    fn duplicates_collapse_on_rebalance() {
        let mut tree = Tree::from_values([1, 2, 3]);
        tree.insert(2);
        tree.insert(2);
        assert_eq!(tree.values(), vec![1, 2, 2, 2, 3]);

        tree.rebalance();
        assert_eq!(tree.values(), vec![1, 2, 3]);
    }

    #[traced_test]
    #[test]
    fn walk_without_visitor_fails_fast() {
        let tree = scenario_tree();

        assert_eq!(
            tree.walk(Traversal::InOrder, None),
            Err(TreeError::MissingVisitor)
        );
        assert!(logs_contain("traversal requested without a visitor"));
    }

    #[test]
    fn walk_dispatches_each_order() {
        let tree = Tree::from_values([1, 2, 3]);

        for (order, expected) in [
            (Traversal::InOrder, vec![1, 2, 3]),
            (Traversal::PreOrder, vec![2, 1, 3]),
            (Traversal::PostOrder, vec![1, 3, 2]),
            (Traversal::LevelOrder, vec![2, 1, 3]),
        ] {
            let mut visited = Vec::new();
            tree.walk(order, Some(&mut |node: &Node<i32>| {
                visited.push(*node.value())
            }))
            .unwrap();

            assert_eq!(visited, expected, "{:?}", order);
        }
    }
}
