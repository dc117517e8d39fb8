//! Structural matcher and rewriter for method-call chains.
//!
//! Given an ordered chain pattern ("find `receiver.getX().doY()`") and a
//! replacement call sequence ("rewrite to `receiver.doZ()`"), this crate
//! locates matching chains in a [`refract_ir`] tree and replaces them,
//! preserving the original receiver expression. A match is all-or-nothing:
//! a chain that fails at any link records no edits.
//!
//! # Pipeline Position
//!
//! ```text
//! parse (external) → **match + rewrite** → serialize (external)
//! ```
//!
//! Matching is pure; mutation flows through the [`EditRecorder`] capability,
//! so a traversal pass accumulates replacement instructions and commits them
//! in one step. Parsing source text and printing the edited tree back out
//! belong to the surrounding tool, not this crate.
//!
//! # Example
//!
//! Collapsing `thingProvider.getCurrentFoo().doFooThing()` into
//! `thingProvider.doBarThing()`:
//!
//! ```text
//! let pattern = ChainPattern::new(vec![
//!     MethodPattern::named("getCurrentFoo")?,
//!     MethodPattern::named("doFooThing")?,
//! ])?;
//! let replacement = Replacement::new(["doBarThing"], &mut interner)?;
//! ChainRefactor::new(pattern, replacement).run(root, &mut arena, &interner)?;
//! ```

mod editor;
mod errors;
mod matcher;
mod operation;
mod pattern;
mod rewriter;

pub use editor::{Edit, EditRecorder, TreeEditor};
pub use errors::{EditError, PatternError, RewriteError};
pub use matcher::{try_match, ChainMatch};
pub use operation::ChainRefactor;
pub use pattern::{CallConstraint, ChainPattern, MethodPattern, Replacement};
pub use rewriter::apply;
