//! Variable mapping types
//!
//! Substitution only ever reads a mapping, so the engine is written against the
//! [`VariableSource`] trait rather than a concrete map type.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

/// Read-only lookup of variable values by exact, case-sensitive name.
pub trait VariableSource {
    /// Returns the value stored under `name`, if any.
    fn lookup(&self, name: &str) -> Option<&str>;

    /// Returns true if `name` has a value.
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }
}

impl<T: VariableSource + ?Sized> VariableSource for &T {
    fn lookup(&self, name: &str) -> Option<&str> {
        (**self).lookup(name)
    }
}

impl<H: BuildHasher> VariableSource for HashMap<String, String, H> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl VariableSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// An owned, name-ordered collection of variables.
///
/// Serializes as a plain JSON object of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableMap {
    variables: BTreeMap<String, String>,
}

impl VariableMap {
    /// Creates an empty variable map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.variables.insert(name.into(), value.into())
    }

    /// Returns the value of a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Removes a variable, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.variables.remove(name)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl VariableSource for VariableMap {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for VariableMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl From<BTreeMap<String, String>> for VariableMap {
    fn from(variables: BTreeMap<String, String>) -> Self {
        Self { variables }
    }
}
