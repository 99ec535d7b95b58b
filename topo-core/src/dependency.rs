//! Dependencies
//!
//! A dependency states that one element (the child) must be ordered after
//! another (the parent). Dependency lists can be built in code or loaded
//! from JSON, for example when ordering constraints live in a config file:
//!
//! ```json
//! [
//!     { "child": "web", "parent": "database" },
//!     { "child": "web", "parent": "cache" }
//! ]
//! ```

use std::fmt;
use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A single ordering constraint: `child` depends upon `parent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency<T> {
    /// The element that must come later
    pub child: T,
    /// The element that must come first
    pub parent: T,
}

impl<T> Dependency<T> {
    /// Create a dependency of `child` upon `parent`.
    pub fn new(child: T, parent: T) -> Self {
        Self { child, parent }
    }
}

impl<T> From<(T, T)> for Dependency<T> {
    fn from((child, parent): (T, T)) -> Self {
        Self::new(child, parent)
    }
}

impl<T: fmt::Display> fmt::Display for Dependency<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} depends upon {}", self.child, self.parent)
    }
}

/// An ordered list of dependencies.
///
/// Duplicates are allowed; they describe the same constraint twice and sort
/// exactly as a single copy would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dependencies<T> {
    entries: Vec<Dependency<T>>,
}

impl<T> Dependencies<T> {
    /// Create an empty dependency list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a dependency of `child` upon `parent`.
    pub fn push(&mut self, child: T, parent: T) {
        self.entries.push(Dependency::new(child, parent));
    }

    /// Get the number of dependencies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list holds no dependencies.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the dependencies in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dependency<T>> {
        self.entries.iter()
    }
}

impl<T: DeserializeOwned> Dependencies<T> {
    /// Parse a dependency list from a JSON array of
    /// `{ "child": ..., "parent": ... }` objects.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<T> Default for Dependencies<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Dependencies<T> {
    type Target = [Dependency<T>];

    fn deref(&self) -> &[Dependency<T>] {
        &self.entries
    }
}

impl<T> From<Vec<Dependency<T>>> for Dependencies<T> {
    fn from(entries: Vec<Dependency<T>>) -> Self {
        Self { entries }
    }
}

impl<T, D> FromIterator<D> for Dependencies<T>
where
    D: Into<Dependency<T>>,
{
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Dependencies<T> {
    type Item = &'a Dependency<T>;
    type IntoIter = std::slice::Iter<'a, Dependency<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
