//! Graph Vertices
//!
//! This module defines the per-vertex arc storage. A vertex is identified by
//! its element value, which is the key it is stored under in the graph, so
//! the vertex itself only holds its outgoing arcs.

use std::hash::Hash;

use indexmap::IndexSet;

/// The outgoing arcs of a single vertex.
///
/// Arcs are kept in the order they were first added. Traversal follows this
/// order, which keeps the sort output a pure function of its input.
#[derive(Debug, Clone)]
pub(crate) struct Vertex<T> {
    /// Targets of the arcs leaving this vertex.
    arcs: IndexSet<T>,
}

impl<T> Vertex<T>
where
    T: Eq + Hash,
{
    /// Create a new vertex with no arcs.
    pub(crate) fn new() -> Self {
        Self {
            arcs: IndexSet::new(),
        }
    }

    /// Add an arc from this vertex to `target`.
    ///
    /// Returns false if the arc already existed.
    pub(crate) fn add_arc(&mut self, target: T) -> bool {
        self.arcs.insert(target)
    }

    /// Check if this vertex has an arc to `target`.
    pub(crate) fn has_arc(&self, target: &T) -> bool {
        self.arcs.contains(target)
    }

    /// Iterate over arc targets in insertion order.
    pub(crate) fn arcs(&self) -> indexmap::set::Iter<'_, T> {
        self.arcs.iter()
    }

    /// Get the number of outgoing arcs.
    pub(crate) fn out_degree(&self) -> usize {
        self.arcs.len()
    }
}

impl<T> Default for Vertex<T>
where
    T: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_has_no_arcs() {
        let vertex: Vertex<&str> = Vertex::new();
        assert_eq!(vertex.out_degree(), 0);
        assert_eq!(vertex.arcs().count(), 0);
    }

    #[test]
    fn arcs_are_idempotent() {
        let mut vertex = Vertex::new();
        assert!(vertex.add_arc("a"));
        assert!(!vertex.add_arc("a"));
        assert_eq!(vertex.out_degree(), 1);
        assert!(vertex.has_arc(&"a"));
        assert!(!vertex.has_arc(&"b"));
    }

    #[test]
    fn arcs_keep_insertion_order() {
        let mut vertex = Vertex::new();
        for target in [5, 3, 9, 1, 3] {
            vertex.add_arc(target);
        }

        let targets: Vec<_> = vertex.arcs().copied().collect();
        assert_eq!(targets, vec![5, 3, 9, 1]);
    }
}
