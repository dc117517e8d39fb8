//! Expression arena.

use crate::{Expr, ExprId, ExprRange};

/// Convert a length to u32, panicking with context on overflow.
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} count exceeds u32::MAX"))
}

fn to_u16(len: usize, what: &str) -> u16 {
    u16::try_from(len).unwrap_or_else(|_| panic!("{what} count exceeds u16::MAX"))
}

/// Arena for expressions.
///
/// # Index Spaces
///
/// - `exprs`: nodes indexed by [`ExprId`]
/// - `expr_lists`: flat `Vec<ExprId>` indexed by [`ExprRange`]
///
/// Node IDs are stable: [`set_expr`](ExprArena::set_expr) replaces a node's
/// content in place, so every parent that references the ID sees the new
/// subtree without any ID rewriting. This is the primitive an edit pass
/// commits through.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            exprs: Vec::new(),
            expr_lists: Vec::new(),
        }
    }

    /// Allocate an expression, returning its ID.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is [`ExprId::INVALID`] or out of bounds.
    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Replace the content of an existing node, keeping its ID.
    ///
    /// # Panics
    /// Panics if `id` is [`ExprId::INVALID`] or out of bounds.
    pub fn set_expr(&mut self, id: ExprId, expr: Expr) {
        self.exprs[id.index()] = expr;
    }

    /// Allocate a contiguous range of expression IDs (argument lists).
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression lists");
        self.expr_lists.extend(ids);
        let len = to_u16(self.expr_lists.len() - start as usize, "expression list");
        if len == 0 {
            ExprRange::EMPTY
        } else {
            ExprRange::new(start, len)
        }
    }

    /// Get expression IDs from a range.
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        if range.is_empty() {
            return &[];
        }
        let start = range.start as usize;
        &self.expr_lists[start..start + range.len()]
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Returns `true` if no nodes have been allocated.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExprKind, Span};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alloc_and_get() {
        let mut arena = ExprArena::new();
        let id = arena.alloc_expr(Expr::new(ExprKind::Int(7), Span::new(0, 1)));
        assert_eq!(arena.get_expr(id).kind, ExprKind::Int(7));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_set_expr_keeps_id() {
        let mut arena = ExprArena::new();
        let id = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::DUMMY));
        arena.set_expr(id, Expr::new(ExprKind::Bool(true), Span::DUMMY));
        assert_eq!(arena.get_expr(id).kind, ExprKind::Bool(true));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_expr_list_roundtrip() {
        let mut arena = ExprArena::new();
        let a = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::DUMMY));
        let b = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::DUMMY));
        let range = arena.alloc_expr_list([a, b]);
        assert_eq!(arena.get_expr_list(range), &[a, b]);
    }

    #[test]
    fn test_empty_expr_list() {
        let mut arena = ExprArena::new();
        let range = arena.alloc_expr_list([]);
        assert!(range.is_empty());
        assert_eq!(arena.get_expr_list(range), &[]);
    }
}
