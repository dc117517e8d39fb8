//! Error types for pattern construction and rewriting.
//!
//! A failed match is not an error: [`try_match`](crate::try_match) returns
//! `None` for that. The variants here are either configuration misuse caught
//! before any traversal begins, or an editor refusing an edit, which points
//! at a traversal bug in the caller.

use refract_ir::ExprId;
use thiserror::Error;

/// Construction-time misuse of a pattern or replacement.
///
/// These abort the refactor configuration up front: they indicate a
/// programming error, not a property of the source being analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A chain pattern needs at least one link.
    #[error("chain pattern must contain at least one link")]
    EmptyPattern,

    /// A replacement needs at least one method name.
    #[error("replacement must contain at least one method name")]
    EmptyReplacement,

    /// A method name must be non-empty.
    #[error("method name must not be empty")]
    EmptyName,
}

/// The editor refused a recorded edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A second edit targeted a node that already has a recorded
    /// replacement in this pass.
    #[error("conflicting edit: {target:?} already has a recorded replacement")]
    Conflict { target: ExprId },
}

/// Failure while applying a confirmed match.
///
/// Never retried: an edit conflict means the caller's traversal visited
/// overlapping matches, which re-running cannot fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// The edit recorder rejected the replacement instruction.
    #[error("edit recorder rejected rewrite: {0}")]
    Rejected(#[from] EditError),
}
