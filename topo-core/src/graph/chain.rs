//! Element Chains
//!
//! A chain is an ordered run of elements, rendered for diagnostics as the
//! elements joined with `" -> "`. Cycle reports use it to show the exact
//! path that loops back on itself.

use std::fmt;
use std::ops::Deref;

/// An ordered, displayable sequence of elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain<T> {
    elements: Vec<T>,
}

impl<T> Chain<T> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append an element to the end of the chain.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Get the number of elements in the chain.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the chain holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consume the chain, returning its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: PartialEq> Chain<T> {
    /// Find the position of the first occurrence of `element`.
    pub fn position(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for Chain<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut elements = self.elements.iter();
        if let Some(first) = elements.next() {
            write!(f, "{}", first)?;
            for element in elements {
                write!(f, " -> {}", element)?;
            }
        }
        Ok(())
    }
}
