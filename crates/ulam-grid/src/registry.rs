//! Callback registries.
//!
//! Counters hold [`Predicate`]s and markers hold [`Classifier`]s. Both are
//! keyed by id, iterate in registration order, and re-registering an id
//! replaces its callback in place.

use std::fmt;

/// Decides whether a cell counts toward a counter.
pub trait Predicate<T: ?Sized> {
    fn evaluate(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn evaluate(&self, value: &T) -> bool {
        self(value)
    }
}

/// Produces a highlight label for a cell, or `None`.
pub trait Classifier<T: ?Sized> {
    fn classify(&self, value: &T) -> Option<String>;
}

impl<T: ?Sized, F> Classifier<T> for F
where
    F: Fn(&T) -> Option<String>,
{
    fn classify(&self, value: &T) -> Option<String> {
        self(value)
    }
}

/// Ordered `id -> callback` map.
pub struct Registry<C: ?Sized> {
    entries: Vec<(String, Box<C>)>,
}

impl<C: ?Sized> Registry<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `callback` under `id`. Returns true if it replaced an earlier one.
    pub fn insert(&mut self, id: impl Into<String>, callback: Box<C>) -> bool {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => {
                entry.1 = callback;
                true
            }
            None => {
                self.entries.push((id, callback));
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&C> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, callback)| callback.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &C)> + '_ {
        self.entries
            .iter()
            .map(|(id, callback)| (id.as_str(), callback.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: ?Sized> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}
