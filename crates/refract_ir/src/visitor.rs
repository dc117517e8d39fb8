//! Tree traversal.
//!
//! Provides generic read-only traversal of the expression tree. The visitor
//! can mutate its own state during traversal, but the tree stays immutable;
//! this is the seam a traversal driver uses to feed candidate nodes to the
//! rewrite pass.
//!
//! Default implementations call [`walk_expr`] to traverse children.
//! Override `visit_*` methods to add custom behavior at specific nodes.

use crate::{Expr, ExprArena, ExprId, ExprKind};

/// Tree visitor trait.
///
/// Traversal is depth-first and pre-order: a node is seen before its
/// receiver, and the receiver before the arguments. For a call chain this
/// means outermost call first, matching document order of the chain heads.
pub trait Visitor<'ast> {
    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        walk_expr(self, expr, arena);
    }

    /// Visit an expression by ID.
    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast ExprArena) {
        self.visit_expr(arena.get_expr(id), arena);
    }
}

/// Walk an expression's children.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast ExprArena,
) {
    match &expr.kind {
        // Leaves - no children
        ExprKind::Int(_)
        | ExprKind::Bool(_)
        | ExprKind::String(_)
        | ExprKind::Unit
        | ExprKind::Ident(_)
        | ExprKind::Error => {}

        ExprKind::Field { receiver, .. } => {
            visitor.visit_expr_id(*receiver, arena);
        }

        ExprKind::MethodCall { receiver, args, .. } => {
            if receiver.is_valid() {
                visitor.visit_expr_id(*receiver, arena);
            }
            for &arg_id in arena.get_expr_list(*args) {
                visitor.visit_expr_id(arg_id, arena);
            }
        }
    }
}
