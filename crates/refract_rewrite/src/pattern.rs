//! Chain patterns and replacements.
//!
//! A [`ChainPattern`] describes the call chain to find, one
//! [`MethodPattern`] per link; a [`Replacement`] describes the call sequence
//! that takes its place. Both are validated at construction so the matching
//! and rewriting stages have no degenerate inputs to handle.

use refract_ir::{ExprArena, ExprId, Name, StringInterner};

use crate::PatternError;

/// Opaque per-call constraint evaluated by an external resolver.
///
/// Covers what a name predicate cannot: declaring type, overload shape,
/// anything needing resolved bindings. The matcher treats this as an
/// injected capability; implementations must be pure and callable
/// repeatedly.
pub trait CallConstraint {
    /// Report whether the call at `call` satisfies the constraint.
    fn holds(&self, arena: &ExprArena, call: ExprId) -> bool;
}

/// Predicate over one link of a call chain.
///
/// Stateless and side-effect free; one `MethodPattern` may be consulted for
/// any number of candidate calls.
pub struct MethodPattern {
    predicate: Box<dyn Fn(&str) -> bool>,
    constraint: Option<Box<dyn CallConstraint>>,
}

impl MethodPattern {
    /// Pattern matching an exact method name.
    ///
    /// Fails fast on an empty name: that is a configuration error, caught
    /// before any traversal begins.
    pub fn named(name: impl Into<String>) -> Result<Self, PatternError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PatternError::EmptyName);
        }
        Ok(Self {
            predicate: Box::new(move |candidate| candidate == name),
            constraint: None,
        })
    }

    /// Pattern matching an arbitrary name predicate.
    pub fn matching(predicate: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
            constraint: None,
        }
    }

    /// Attach a resolver-backed constraint to this link.
    pub fn with_constraint(mut self, constraint: impl CallConstraint + 'static) -> Self {
        self.constraint = Some(Box::new(constraint));
        self
    }

    /// Test the name predicate alone.
    pub fn matches(&self, name: &str) -> bool {
        (self.predicate)(name)
    }

    /// Test the full link: name predicate plus the optional constraint.
    pub fn matches_call(&self, arena: &ExprArena, call: ExprId, name: &str) -> bool {
        self.matches(name)
            && self
                .constraint
                .as_ref()
                .map_or(true, |c| c.holds(arena, call))
    }
}

/// Ordered call-chain pattern.
///
/// Index 0 is the innermost (first-called) link, the last index the
/// outermost (last-called) link, mirroring evaluation order of a fluent
/// chain `a().b().c()` where `c` is outermost. Immutable once constructed;
/// length ≥ 1 is a construction invariant.
pub struct ChainPattern {
    links: Vec<MethodPattern>,
}

impl ChainPattern {
    /// Build a pattern from links, innermost first.
    ///
    /// A chain of length zero is meaningless and rejected.
    pub fn new(links: Vec<MethodPattern>) -> Result<Self, PatternError> {
        if links.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        Ok(Self { links })
    }

    /// Number of links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always `false`; emptiness is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Get the link at `index` (0 = innermost).
    pub fn link(&self, index: usize) -> &MethodPattern {
        &self.links[index]
    }
}

/// Ordered method names that replace a matched chain.
///
/// Index 0 is the innermost (first-called) name. Names are interned at
/// construction so the rewriting stage needs no interner access. No length
/// relationship with the pattern is assumed: an n-link match may collapse
/// into or expand to any m ≥ 1 calls.
pub struct Replacement {
    names: Vec<Name>,
}

impl Replacement {
    /// Build a replacement from method names, innermost first.
    ///
    /// Rejects an empty sequence and empty names.
    pub fn new<I, S>(names: I, interner: &mut StringInterner) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut interned = Vec::new();
        for name in names {
            let name = name.as_ref();
            if name.is_empty() {
                return Err(PatternError::EmptyName);
            }
            interned.push(interner.intern(name));
        }
        if interned.is_empty() {
            return Err(PatternError::EmptyReplacement);
        }
        Ok(Self { names: interned })
    }

    /// The interned names, innermost first.
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    /// Number of calls in the replacement chain.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`; emptiness is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
