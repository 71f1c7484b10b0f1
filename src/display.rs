use std::fmt::{Display, Formatter};

use colored::Colorize;

use crate::{node::Node, Tree};

/// Renders a tree's shape as indented ASCII-art branches.
///
/// Diagnostic output only, not part of the tree's functional contract. The
/// right subtree prints above its node and the left subtree below, so the
/// output reads as the tree lying on its side, root at the left margin.
pub struct TreeDisplay;

impl TreeDisplay {
    pub fn format<V>(node: &Node<V>, f: &mut Formatter<'_>) -> std::fmt::Result
    where
        V: Ord + Clone + Display,
    {
        Self::format_node(node, f, "", true)
    }

    fn format_node<V>(
        node: &Node<V>,
        f: &mut Formatter<'_>,
        prefix: &str,
        is_left: bool,
    ) -> std::fmt::Result
    where
        V: Ord + Clone + Display,
    {
        if let Some(right) = node.right() {
            let pad = if is_left { "│   " } else { "    " };
            Self::format_node(right, f, &format!("{}{}", prefix, pad), false)?;
        }

        let connector = if is_left { "└── " } else { "┌── " };
        writeln!(f, "{}{}{}", prefix, connector.dimmed(), node.value())?;

        if let Some(left) = node.left() {
            let pad = if is_left { "    " } else { "│   " };
            Self::format_node(left, f, &format!("{}{}", prefix, pad), true)?;
        }

        Ok(())
    }
}

impl<V> Display for Tree<V>
where
    V: Ord + Clone + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.root() {
            Some(root) => TreeDisplay::format(root, f),
            None => f.write_str("(empty)\n"),
        }
    }
}
