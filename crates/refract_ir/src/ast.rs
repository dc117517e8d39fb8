//! Expression nodes.
//!
//! All children are indices, not boxes: `ExprId(u32)` into an
//! [`ExprArena`](crate::ExprArena). The variant set is the surface a
//! call-chain rewrite needs: method calls with nested receivers, the
//! non-call receiver shapes a chain can bottom out on, and literals for
//! argument payloads.

use std::fmt;

use crate::{ExprId, ExprRange, Name, Span};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExprKind {
    /// Integer literal: 42
    Int(i64),

    /// Boolean literal: true, false
    Bool(bool),

    /// String literal (interned)
    String(Name),

    /// Unit: ()
    Unit,

    /// Variable reference
    Ident(Name),

    /// Field access: receiver.field
    Field { receiver: ExprId, field: Name },

    /// Method call: receiver.method(args...)
    ///
    /// `receiver == ExprId::INVALID` models an implicit or static receiver.
    MethodCall {
        receiver: ExprId,
        method: Name,
        args: ExprRange,
    },

    /// Parse error placeholder
    Error,
}

impl ExprKind {
    /// Whether this node is a method call, the only node kind the chain
    /// rewriter considers as a candidate.
    pub const fn is_method_call(&self) -> bool {
        matches!(self, ExprKind::MethodCall { .. })
    }
}

impl fmt::Debug for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprKind::Int(n) => write!(f, "Int({n})"),
            ExprKind::Bool(b) => write!(f, "Bool({b})"),
            ExprKind::String(n) => write!(f, "String({n:?})"),
            ExprKind::Unit => write!(f, "Unit"),
            ExprKind::Ident(n) => write!(f, "Ident({n:?})"),
            ExprKind::Field { receiver, field } => {
                write!(f, "Field({receiver:?}, {field:?})")
            }
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => {
                write!(f, "MethodCall({receiver:?}, {method:?}, {args:?})")
            }
            ExprKind::Error => write!(f, "Error"),
        }
    }
}
