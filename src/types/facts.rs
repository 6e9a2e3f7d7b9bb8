use std::collections::HashMap;

use super::Value;

/// Mutable fact set consulted (and possibly augmented) during evaluation.
///
/// A fact name may be bound to a [`Value`] or be present but undefined.
/// Rules see missing and undefined facts the same way: [`get`](Self::get)
/// returns `None` for both.
///
/// The engine hands the same `Facts` to every rule in sequence without
/// copying it, so a write by one rule is visible to every later rule and to
/// the caller once evaluation returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facts {
    data: HashMap<String, Option<Value>>,
}

impl Facts {
    /// Create an empty fact set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a fact to a value, builder style.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Declare a fact without a value, builder style.
    #[must_use]
    pub fn undefined(mut self, name: &str) -> Self {
        self.insert_undefined(name);
        self
    }

    /// Bind a fact to a value, replacing any previous binding.
    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.data.insert(name.to_owned(), Some(value.into()));
    }

    /// Mark a fact as present but undefined.
    pub fn insert_undefined(&mut self, name: &str) {
        self.data.insert(name.to_owned(), None);
    }

    /// Look up a fact. Returns `None` if it is missing or undefined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.data.get(name).and_then(Option::as_ref)
    }

    /// Remove a fact entirely, returning its value if it had one.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.data.remove(name).flatten()
    }

    /// Whether a fact with this name is present, defined or not.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all facts, undefined ones included, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Facts {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}
