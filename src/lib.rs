//! # Sorbus
//!
//! A binary search tree library for Rust.
//!
//! ## Overview
//!
//! Sorbus provides a binary search tree over totally-ordered values,
//! constructed to minimal height from an arbitrary input sequence.
//! Mutations never restructure the tree on their own; balance is restored
//! explicitly through [`Tree::rebalance`], which rebuilds the tree from its
//! in-order value sequence.

mod builder;
mod display;
mod error;
mod iterator;
mod node;
mod traverse;
mod tree;

pub use builder::TreeBuilder;
pub use display::TreeDisplay;
pub use error::TreeError;
pub use iterator::Iter;
pub use node::Node;
pub use traverse::Traversal;
pub use tree::Tree;

/// Edge count from the root down to a node.
pub type NodeDepth = usize;

/// Edge count from a node down to its deepest leaf. An absent subtree has
/// height -1.
pub type NodeHeight = isize;
