use thiserror::Error;

/// Errors surfaced by tree operations.
///
/// Search-style queries report absence through `Option` rather than an
/// error; mutations are total. The only failure left is asking for a
/// traversal without supplying a visitor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A traversal was requested through [`crate::Tree::walk`] with no
    /// visitor callback.
    #[error("no visitor callback supplied")]
    MissingVisitor,
}
