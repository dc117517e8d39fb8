//! Refract IR - syntax tree types for the call-chain rewriter.
//!
//! This crate contains the tree representation the rewrite pass operates on:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Expression nodes (`Expr`, `ExprKind`)
//! - Arena allocation for expressions
//! - Read-only visitor traversal
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → `Name(u32)`
//! - **Flatten Everything**: No `Box<Expr>`, use `ExprId(u32)` indices
//!
//! Node IDs are stable across rewrites: replacing a node's content via
//! [`ExprArena::set_expr`] leaves every parent reference intact, which is
//! what lets an edit pass swap a whole subtree with a single instruction.

mod arena;
mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
pub mod visitor;

pub use arena::ExprArena;
pub use ast::{Expr, ExprKind};
pub use expr_id::{ExprId, ExprRange};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
