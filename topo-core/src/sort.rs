//! Dependency Sorter
//!
//! Reorders a caller's elements in place so that every element comes after
//! the elements it depends upon.
//!
//! # How It Works
//!
//! 1. With no dependencies, return at once and leave the slice untouched.
//! 2. Register every element as a vertex, in slice order.
//! 3. Add an arc from each dependency's child to its parent.
//! 4. Sort the graph topologically.
//! 5. Check the result covers the slice one-to-one, then copy it back.
//!
//! Any failure is returned before step 5, so the slice is only ever written
//! with a complete, valid ordering.

use std::hash::Hash;

use tracing::debug;

use crate::dependency::Dependency;
use crate::error::{TopoError, TopoResult};
use crate::graph::Graph;

/// Sort `elements` in place so every dependency's parent precedes its child.
///
/// Elements unconstrained relative to each other keep the order implied by
/// their slice positions and the order of `dependencies`, so the same input
/// always produces the same output.
///
/// # Errors
///
/// - [`TopoError::MissingVertex`] if a dependency names an element not in
///   `elements`
/// - [`TopoError::CycleDetected`] if the dependencies form a cycle
/// - [`TopoError::Mismatch`] if the sorted result does not match the input
///   length, which happens when `elements` holds duplicates
///
/// On error, `elements` is left in its original order.
///
/// # Example
///
/// ```
/// use topo_core::{sort, Dependency};
///
/// let mut services = vec!["web", "cache", "database"];
/// let deps = [
///     Dependency::new("web", "database"),
///     Dependency::new("cache", "database"),
/// ];
///
/// sort(&mut services, &deps).unwrap();
/// assert_eq!(services, vec!["database", "web", "cache"]);
/// ```
pub fn sort<T>(elements: &mut [T], dependencies: &[Dependency<T>]) -> TopoResult<(), T>
where
    T: Eq + Hash + Clone,
{
    if dependencies.is_empty() {
        return Ok(());
    }

    let mut graph = Graph::with_vertices(elements.iter().cloned());
    for dependency in dependencies {
        graph.add_arc(&dependency.child, &dependency.parent)?;
    }
    debug!(
        elements = elements.len(),
        dependencies = dependencies.len(),
        arcs = graph.arc_count(),
        "built dependency graph"
    );

    let sorted = graph.sort_topological()?;

    if sorted.len() != elements.len() {
        debug!(
            expected = elements.len(),
            actual = sorted.len(),
            "sorted result does not cover input"
        );
        return Err(TopoError::mismatch(elements.len(), sorted.len()));
    }

    elements.clone_from_slice(&sorted);
    Ok(())
}
