use std::collections::BTreeMap;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Constants every [`SymbolTable::new`] starts with.
///
/// They are ordinary bindings: an assignment such as `pi = 3` replaces them.
pub const CONSTANTS: &[(&str, f64)] = &[("pi", std::f64::consts::PI), ("e", std::f64::consts::E)];

/// Stores the variable bindings used during evaluation.
///
/// Names are case-sensitive. Looking up a name that was never bound is an
/// error, never a default of zero.
///
/// ## Usage
///
/// A `SymbolTable` is owned by the caller and passed by mutable reference into
/// every parse. The same table can be reused across any number of
/// evaluations; a binding written between two calls (for example the current
/// `x` while sampling a range) is seen by the very next call. The table is
/// `Send`, so concurrent evaluators each own one.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    bindings: BTreeMap<String, f64>,
}

impl SymbolTable {
    /// Creates a table seeded with the [`CONSTANTS`].
    ///
    /// # Example
    /// ```
    /// use plotcalc::interpreter::symbols::SymbolTable;
    ///
    /// let symbols = SymbolTable::new();
    /// assert_eq!(symbols.get("pi").unwrap(), std::f64::consts::PI);
    /// assert!(symbols.get("x").is_err());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let bindings = CONSTANTS.iter()
                                .map(|(name, value)| ((*name).to_string(), *value))
                                .collect();
        Self { bindings }
    }

    /// Creates a table with no bindings at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bindings: BTreeMap::new() }
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if `name` is unbound.
    pub fn get(&self, name: &str) -> EvalResult<f64> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn set(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_string(), value);
        }
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterates over all bindings, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_name_is_an_error() {
        let symbols = SymbolTable::empty();
        assert_eq!(symbols.get("y"),
                   Err(RuntimeError::UnknownVariable { name: "y".to_string() }));
    }

    #[test]
    fn set_overwrites_and_names_are_case_sensitive() {
        let mut symbols = SymbolTable::empty();
        symbols.set("x", 1.0);
        symbols.set("x", 2.0);
        symbols.set("X", 3.0);
        assert_eq!(symbols.get("x"), Ok(2.0));
        assert_eq!(symbols.get("X"), Ok(3.0));
        assert_eq!(symbols.len(), 2);
    }

    #[test]
    fn empty_and_seeded_tables() {
        let mut symbols = SymbolTable::empty();
        assert!(symbols.is_empty());
        assert!(!symbols.contains("pi"));

        symbols.set("x", 0.0);
        assert!(!symbols.is_empty());
        assert!(symbols.contains("x"));

        let seeded = SymbolTable::default();
        assert!(seeded.contains("pi") && seeded.contains("e"));
        assert_eq!(seeded.len(), CONSTANTS.len());
    }

    #[test]
    fn constants_can_be_rebound() {
        let mut symbols = SymbolTable::new();
        symbols.set("e", 1.0);
        assert_eq!(symbols.get("e"), Ok(1.0));
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let mut symbols = SymbolTable::new();
        symbols.set("b", 2.0);
        symbols.set("a", 1.0);
        let names: Vec<_> = symbols.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "e", "pi"]);
    }
}
