//! Chain matching.
//!
//! Determines whether a candidate node is the outermost call of a chain
//! that matches a [`ChainPattern`] link for link. Matching is pure: no tree
//! mutation, no state beyond the walk itself.

use refract_ir::{ExprArena, ExprId, ExprKind, ExprRange, StringInterner};

use crate::ChainPattern;

/// A confirmed match of a chain pattern against the tree.
///
/// Holds borrowed IDs into the external arena; the match owns nothing and
/// is discarded once the candidate node has been processed, whether or not
/// a rewrite follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChainMatch {
    /// The outermost matched call.
    pub outermost: ExprId,
    /// The expression beneath the innermost matched link, the receiver a
    /// rewrite preserves. [`ExprId::INVALID`] when the innermost call had
    /// an implicit receiver.
    pub receiver: ExprId,
    /// Argument range of the outermost call, carried through a rewrite
    /// untouched.
    pub args: ExprRange,
    /// Number of matched links; always the full pattern length.
    pub links: usize,
}

/// Match `pattern` against the call chain whose outermost call is `node`.
///
/// Returns `None` for any partial or failed match, which is a common
/// non-error outcome. `Some` means every link matched and a rewrite may be applied.
///
/// Matching is link-for-link and positional: each link must be the direct
/// receiver of the next (`a().x().b()` does not match `[a, b]`). If the
/// candidate's own name fails the outermost link, no receiver is inspected.
pub fn try_match(
    pattern: &ChainPattern,
    node: ExprId,
    arena: &ExprArena,
    interner: &StringInterner,
) -> Option<ChainMatch> {
    if !node.is_valid() {
        return None;
    }
    let ExprKind::MethodCall {
        receiver,
        method,
        args,
    } = arena.get_expr(node).kind
    else {
        return None;
    };

    let mut index = pattern.len() - 1;
    if !pattern
        .link(index)
        .matches_call(arena, node, interner.lookup(method))
    {
        return None;
    }

    // Walk inward through receivers, one link per call. The cursor always
    // points at the expression beneath the last matched call, so once the
    // links run out it is exactly the receiver to preserve.
    let mut cursor = receiver;
    while index > 0 {
        index -= 1;
        if !cursor.is_valid() {
            // Chain ended before the pattern did.
            return None;
        }
        let ExprKind::MethodCall {
            receiver: next,
            method,
            ..
        } = arena.get_expr(cursor).kind
        else {
            // Receiver is not a call: chain too short.
            return None;
        };
        if !pattern
            .link(index)
            .matches_call(arena, cursor, interner.lookup(method))
        {
            return None;
        }
        cursor = next;
    }

    tracing::trace!(node = ?node, links = pattern.len(), "chain pattern matched");
    Some(ChainMatch {
        outermost: node,
        receiver: cursor,
        args,
        links: pattern.len(),
    })
}
