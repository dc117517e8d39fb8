//! Chain rewriting.
//!
//! Turns a confirmed [`ChainMatch`] into one replace instruction against
//! the edit recorder. The whole replacement subtree is built before the
//! instruction is recorded, so a rejected edit leaves the tree unmutated;
//! there is no partial-success state.

use refract_ir::{Expr, ExprArena, ExprKind, ExprRange};

use crate::{ChainMatch, EditRecorder, Replacement, RewriteError};

/// Replace a confirmed match with the replacement chain.
///
/// The new chain keeps the matched chain's innermost receiver; the new
/// outermost call keeps the replaced call's argument list; intermediate
/// calls take no arguments. Every new node takes the replaced node's span,
/// so downstream serialization targets the original text range.
///
/// Only the outermost matched node is replaced. The intermediate calls of
/// the matched chain drop out implicitly because the outermost node's
/// receiver subtree is swapped wholesale.
pub fn apply(
    m: &ChainMatch,
    replacement: &Replacement,
    arena: &mut ExprArena,
    editor: &mut dyn EditRecorder,
) -> Result<(), RewriteError> {
    let span = arena.get_expr(m.outermost).span;
    let names = replacement.names();
    let last = names.len() - 1;

    let mut receiver = m.receiver;
    for (position, &method) in names.iter().enumerate() {
        let args = if position == last {
            m.args
        } else {
            ExprRange::EMPTY
        };
        receiver = arena.alloc_expr(Expr::new(
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            },
            span,
        ));
    }

    tracing::debug!(
        target = ?m.outermost,
        links = m.links,
        calls = names.len(),
        "recording chain rewrite"
    );
    editor.replace(m.outermost, receiver)?;
    Ok(())
}
