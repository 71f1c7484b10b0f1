//! A module providing a builder for constructing minimal-height trees.
//!
//! The `TreeBuilder` type collects values in any order, then deduplicates,
//! sorts, and builds by recursive midpoint split when `done` is called.

use tracing::{debug, debug_span};

use crate::{node::Node, Tree};

/// A builder for constructing trees from value sequences.
///
/// Input values may arrive unsorted and may contain duplicates; the built
/// tree holds exactly the distinct values, at minimal height.
///
/// # Examples
///
/// ```
/// use sorbus::TreeBuilder;
///
/// let tree = TreeBuilder::new()
///     .value(3)
///     .values([1, 4, 1, 5])
///     .done();
///
/// assert!(tree.is_balanced());
/// assert_eq!(tree.values(), vec![1, 3, 4, 5]);
/// ```
#[derive(Debug)]
pub struct TreeBuilder<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    values: Vec<V>,
    debug_span: tracing::Span,
}

impl<V> TreeBuilder<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    /// Creates a new `TreeBuilder` instance.
    pub fn new() -> Self {
        let debug_span = debug_span!("TreeBuilder");
        let _debug = debug_span.enter();
        debug!("Created new TreeBuilder");
        drop(_debug);

        Self {
            values: Vec::new(),
            debug_span,
        }
    }

    /// Adds a single value to the builder.
    pub fn value(mut self, value: V) -> Self {
        self.values.push(value);
        self
    }

    /// Adds every value yielded by an iterator.
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        self.values.extend(values);
        self
    }

    /// Returns the constructed tree when finished building it.
    pub fn done(self) -> Tree<V> {
        let TreeBuilder {
            mut values,
            debug_span,
        } = self;

        debug_span.in_scope(|| {
            values.sort();
            values.dedup();
            debug!("Finished building tree with {} distinct values", values.len());

            Tree::from_root(build_sorted(&values))
        })
    }
}

impl<V> Default for TreeBuilder<V>
where
    V: Ord + Clone + std::fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a subtree from a sorted, deduplicated slice.
///
/// The midpoint (floor division) becomes the subtree root, so left and
/// right subtree sizes differ by at most one element at every level.
pub(crate) fn build_sorted<V>(sorted: &[V]) -> Option<Box<Node<V>>>
where
    V: Ord + Clone + std::fmt::Display,
{
    if sorted.is_empty() {
        return None;
    }

    let mid = sorted.len() / 2;
    let mut node = Box::new(Node::new(sorted[mid].clone()));
    node.left = build_sorted(&sorted[..mid]);
    node.right = build_sorted(&sorted[mid + 1..]);

    Some(node)
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[traced_test]
    #[test]
    fn build_minimal_height_tree() {
        let tree = Tree::from_values([4, 5, 8, 9, 12, 54, 22, 11, 14, 17]);

        assert!(tree.is_balanced());
        assert_eq!(tree.root().map(|root| root.height()), Some(3));
        assert_eq!(tree.values(), vec![4, 5, 8, 9, 11, 12, 14, 17, 22, 54]);
    }

    #[test]
    fn empty_input_builds_empty_tree() {
        let tree: Tree<i32> = Tree::from_values([]);
        assert!(tree.is_empty());
        assert!(tree.is_balanced());
    }

    #[test]
    fn single_value_builds_leaf_root() {
        let tree = Tree::from_values([9]);
        let root = tree.root().unwrap();

        assert!(root.is_leaf());
        assert_eq!(root.height(), 0);
    }

    #[test]
    fn duplicates_collapse_during_build() {
        let tree = Tree::from_values([2, 1, 2, 3, 1]);

        assert_eq!(tree.values(), vec![1, 2, 3]);
        assert_eq!(*tree.root().unwrap().value(), 2);
    }

    #[test]
    fn even_split_biases_right() {
        // mid = 4 / 2 picks index 2, so 3 becomes the root
        let tree = Tree::from_values([1, 2, 3, 4]);
        let root = tree.root().unwrap();

        assert_eq!(*root.value(), 3);
        assert_eq!(root.left().map(|n| *n.value()), Some(2));
        assert_eq!(root.right().map(|n| *n.value()), Some(4));
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn builder_chains_values() {
        let tree = TreeBuilder::new().value(10).values([30, 20]).value(40).done();

        assert_eq!(tree.values(), vec![10, 20, 30, 40]);
        assert!(tree.is_balanced());
    }
}
