//! Directed Graph
//!
//! The graph owns every registered vertex, keyed by its element value, and
//! sorts them topologically on demand.
//!
//! # Algorithm
//!
//! Sorting is a depth-first postorder traversal run from every vertex in
//! registration order:
//!
//! 1. Skip the vertex if an earlier traversal already emitted it
//! 2. If the vertex is on the current descent path, the path from its first
//!    occurrence back to it is a cycle; fail with that chain
//! 3. Otherwise push it on the path and visit each arc target in arc order
//! 4. Pop it from the path and emit it
//!
//! Every arc target is emitted before its source, so an arc `child ->
//! parent` places the parent first. Because both the root order and the arc
//! order follow insertion, the same graph always sorts the same way.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use super::path::Path;
use super::vertex::Vertex;
use crate::error::{ArcSide, TopoError, TopoResult};

/// A directed graph over arbitrary hashable elements.
///
/// Elements are used directly as vertex keys; there is no separate handle.
/// Arcs may only join vertices that are already registered.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// All vertices in registration order, each with its outgoing arcs.
    vertices: IndexMap<T, Vertex<T>>,
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    /// Create a graph with the given elements registered as vertices.
    ///
    /// Repeated elements are registered once, at their first position.
    pub fn with_vertices<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut graph = Self::new();
        graph.extend(elements);
        graph
    }

    /// Register `element` as a vertex with no arcs.
    ///
    /// Returns false if it was already registered, in which case the graph
    /// is unchanged.
    pub fn add_vertex(&mut self, element: T) -> bool {
        if self.vertices.contains_key(&element) {
            return false;
        }
        self.vertices.insert(element, Vertex::new());
        trace!(vertices = self.vertices.len(), "registered vertex");
        true
    }

    /// Add an arc from `from` to `to`.
    ///
    /// Both ends must already be registered. Adding an existing arc again
    /// is a no-op.
    pub fn add_arc(&mut self, from: &T, to: &T) -> TopoResult<(), T> {
        let has_destination = self.vertices.contains_key(to);

        let source = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| TopoError::missing_vertex(ArcSide::Source, from.clone()))?;

        if !has_destination {
            return Err(TopoError::missing_vertex(ArcSide::Destination, to.clone()));
        }

        if source.add_arc(to.clone()) {
            trace!(out_degree = source.out_degree(), "added arc");
        }
        Ok(())
    }

    /// Check if `element` is a registered vertex.
    pub fn contains(&self, element: &T) -> bool {
        self.vertices.contains_key(element)
    }

    /// Check if an arc runs from `from` to `to`.
    pub fn has_arc(&self, from: &T, to: &T) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|vertex| vertex.has_arc(to))
    }

    /// Iterate over the arc targets of `element`, in arc order.
    ///
    /// Returns `None` if `element` is not registered.
    pub fn arcs(&self, element: &T) -> Option<indexmap::set::Iter<'_, T>> {
        self.vertices.get(element).map(Vertex::arcs)
    }

    /// Iterate over all vertices in registration order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.vertices.keys()
    }

    /// Get the number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the total number of distinct arcs.
    pub fn arc_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sort all vertices so that every arc target precedes its source.
    ///
    /// Each vertex appears exactly once. Fails with
    /// [`TopoError::CycleDetected`] if the arcs contain a cycle, including
    /// an arc from a vertex to itself.
    ///
    /// The traversal is recursive: its stack depth grows with the longest
    /// chain of arcs, one frame per vertex on that chain. Graphs with
    /// dependency chains tens of thousands of vertices long can exhaust the
    /// thread's stack.
    pub fn sort_topological(&self) -> TopoResult<Vec<T>, T> {
        debug!(
            vertices = self.vertex_count(),
            arcs = self.arc_count(),
            "sorting graph topologically"
        );

        let mut emitted = IndexSet::with_capacity(self.vertices.len());
        let mut path = Path::new();

        for root in self.vertices.keys() {
            self.visit(root, &mut emitted, &mut path)?;
        }

        debug!(sorted = emitted.len(), "topological sort complete");
        Ok(emitted.into_iter().collect())
    }

    /// Emit `vertex` after everything reachable from it.
    fn visit(
        &self,
        vertex: &T,
        emitted: &mut IndexSet<T>,
        path: &mut Path<T>,
    ) -> TopoResult<(), T> {
        if emitted.contains(vertex) {
            return Ok(());
        }

        if let Some(cycle) = path.cycle_through(vertex) {
            debug!(length = cycle.len(), depth = path.depth(), "cycle detected");
            return Err(TopoError::cycle(cycle));
        }

        let entered = path.enter(vertex.clone());
        debug_assert!(entered, "vertex already on the descent path");

        if let Some(node) = self.vertices.get(vertex) {
            for target in node.arcs() {
                self.visit(target, emitted, path)?;
            }
        }

        let left = path.leave();
        debug_assert!(left.as_ref() == Some(vertex), "descent path out of step");

        emitted.insert(vertex.clone());
        trace!(emitted = emitted.len(), "emitted vertex");
        Ok(())
    }
}

impl<T> Default for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            self.add_vertex(element);
        }
    }
}

impl<T> FromIterator<T> for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::with_vertices(elements)
    }
}
