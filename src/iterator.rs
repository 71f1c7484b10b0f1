use crate::node::Node;

/// In-order iterator over a tree's nodes.
///
/// Yields node references in ascending value order. The descent uses an
/// explicit stack rather than recursion, so a degenerate (list-shaped) tree
/// cannot exhaust the call stack during iteration.
pub struct Iter<'a, V>
where
    V: Ord + Clone + std::fmt::Display,
{
    stack: Vec<&'a Node<V>>,
    current: Option<&'a Node<V>>,
}

impl<'a, V> Iter<'a, V>
where
    V: Ord + Clone + std::fmt::Display,
{
    pub(crate) fn new(root: Option<&'a Node<V>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V>
where
    V: Ord + Clone + std::fmt::Display,
{
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        // Push the pending left spine, then yield the top of the stack and
        // continue from its right subtree
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }

        let node = self.stack.pop()?;
        self.current = node.right();

        Some(node)
    }
}
