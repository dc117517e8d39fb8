//! Edit recording.
//!
//! The rewriter never mutates the tree directly; it records "replace the
//! subtree at `target` with `replacement`" instructions through the
//! [`EditRecorder`] capability. [`TreeEditor`] is the in-memory recorder for
//! a single traversal pass; serialization back to text stays external.

use refract_ir::{ExprArena, ExprId};
use rustc_hash::FxHashSet;

use crate::EditError;

/// Recorder for structural replacement instructions.
pub trait EditRecorder {
    /// Record one replacement.
    ///
    /// Implementations must refuse a second edit against an
    /// already-recorded target.
    fn replace(&mut self, target: ExprId, replacement: ExprId) -> Result<(), EditError>;
}

/// One recorded replacement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub target: ExprId,
    pub replacement: ExprId,
}

/// In-memory edit recorder for a single traversal pass.
///
/// Edits accumulate in record order and are applied together by
/// [`commit`](TreeEditor::commit). A second edit against the same target
/// means the caller visited overlapping matches in one pass; that is a
/// traversal bug, so it is rejected rather than merged.
#[derive(Debug, Default)]
pub struct TreeEditor {
    edits: Vec<Edit>,
    targets: FxHashSet<ExprId>,
}

impl TreeEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded edits, in record order.
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    /// Number of recorded edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if no edits have been recorded.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every recorded edit to the arena, returning how many applied.
    ///
    /// Each edit copies the replacement node's content into the target ID,
    /// so every parent referencing the target sees the new subtree with no
    /// ID rewriting. The replacement node itself becomes unreferenced.
    pub fn commit(self, arena: &mut ExprArena) -> usize {
        let applied = self.edits.len();
        for edit in &self.edits {
            let replacement = *arena.get_expr(edit.replacement);
            arena.set_expr(edit.target, replacement);
        }
        applied
    }
}

impl EditRecorder for TreeEditor {
    fn replace(&mut self, target: ExprId, replacement: ExprId) -> Result<(), EditError> {
        if !self.targets.insert(target) {
            return Err(EditError::Conflict { target });
        }
        self.edits.push(Edit {
            target,
            replacement,
        });
        Ok(())
    }
}
