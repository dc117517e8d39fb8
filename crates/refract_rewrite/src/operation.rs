//! The composed refactoring operation.
//!
//! [`ChainRefactor`] pairs one chain pattern with one replacement and is
//! what a traversal driver feeds candidate nodes to, once per node. For
//! convenience it also carries its own single-pass driver, [`run`],
//! which collects candidates in document order and commits the pass's
//! edits in one step.
//!
//! [`run`]: ChainRefactor::run

use refract_ir::visitor::{walk_expr, Visitor};
use refract_ir::{ExprArena, ExprId, StringInterner};

use crate::{apply, try_match, ChainPattern, EditRecorder, Replacement, RewriteError, TreeEditor};

/// A configured chain refactoring: find `pattern`, rewrite to `replacement`.
///
/// Holds no traversal state; one instance may be reused across nodes and
/// passes. Candidate nodes are evaluated independently; idempotence across
/// re-visits after a rewrite is the caller's concern (re-run a pass to reach
/// a fixpoint if the replacement can itself match).
pub struct ChainRefactor {
    pattern: ChainPattern,
    replacement: Replacement,
}

impl ChainRefactor {
    /// Create an operation from a validated pattern and replacement.
    pub fn new(pattern: ChainPattern, replacement: Replacement) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    /// Process one candidate node.
    ///
    /// Non-call nodes and failed matches are no-ops returning `Ok(false)`.
    /// On a full match the rewrite is recorded with `editor` and `Ok(true)`
    /// is returned. The tree is only ever mutated through `editor`.
    pub fn visit(
        &self,
        node: ExprId,
        arena: &mut ExprArena,
        interner: &StringInterner,
        editor: &mut dyn EditRecorder,
    ) -> Result<bool, RewriteError> {
        let Some(m) = try_match(&self.pattern, node, arena, interner) else {
            return Ok(false);
        };
        apply(&m, &self.replacement, arena, editor)?;
        Ok(true)
    }

    /// Run one full pass over the tree rooted at `root`.
    ///
    /// Candidate call nodes are collected in document order, each visited
    /// once, and the recorded edits committed together. Returns the number
    /// of rewrites applied. Running to fixpoint is the caller's choice.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(
        &self,
        root: ExprId,
        arena: &mut ExprArena,
        interner: &StringInterner,
    ) -> Result<usize, RewriteError> {
        if !root.is_valid() {
            return Ok(0);
        }

        let mut collector = CallCollector { calls: Vec::new() };
        collector.visit_expr_id(root, arena);

        let mut editor = TreeEditor::new();
        for node in collector.calls {
            self.visit(node, arena, interner, &mut editor)?;
        }
        let applied = editor.commit(arena);
        tracing::debug!(rewrites = applied, "chain refactor pass complete");
        Ok(applied)
    }
}

/// Collects method-call nodes in document (pre-)order.
struct CallCollector {
    calls: Vec<ExprId>,
}

impl<'ast> Visitor<'ast> for CallCollector {
    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast ExprArena) {
        if arena.get_expr(id).kind.is_method_call() {
            self.calls.push(id);
        }
        walk_expr(self, arena.get_expr(id), arena);
    }
}
