//! String interner for identifier storage.
//!
//! Provides O(1) interning and lookup. A refactoring pass deals with one
//! compilation unit at a time on a single thread, so no locking is needed.

use rustc_hash::FxHashMap;

use crate::Name;

/// String interner mapping identifier text to compact [`Name`] IDs.
///
/// Interned strings are leaked and live for the lifetime of the process;
/// the set of distinct method and identifier names in a pass is bounded by
/// the input, so the leak is bounded too.
pub struct StringInterner {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, Name::EMPTY);
        Self {
            map,
            strings: vec![empty],
        }
    }

    /// Intern a string, returning its [`Name`].
    ///
    /// Interning the same text twice returns the same `Name`.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::new(crate::arena::to_u32(self.strings.len(), "interned strings"));
        self.strings.push(leaked);
        self.map.insert(leaked, name);
        name
    }

    /// Resolve a [`Name`] back to its text.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings[name.index()]
    }

    /// Number of interned strings (including the pre-interned empty string).
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns `true` if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_dedupes() {
        let mut interner = StringInterner::new();
        let a = interner.intern("doFooThing");
        let b = interner.intern("doFooThing");
        assert_eq!(a, b);
        assert_eq!(interner.lookup(a), "doFooThing");
    }

    #[test]
    fn test_intern_distinct() {
        let mut interner = StringInterner::new();
        let a = interner.intern("getCurrentFoo");
        let b = interner.intern("doFooThing");
        assert_ne!(a, b);
        assert_eq!(interner.lookup(a), "getCurrentFoo");
        assert_eq!(interner.lookup(b), "doFooThing");
    }

    #[test]
    fn test_empty_pre_interned() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
        assert_eq!(interner.len(), 1);
    }
}
