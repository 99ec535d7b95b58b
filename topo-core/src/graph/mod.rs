//! Dependency Graph
//!
//! This module implements the directed graph that the sorter builds from a
//! caller's elements and their dependencies.
//!
//! # Overview
//!
//! The graph is keyed directly by element value:
//!
//! - Vertices are the registered elements, kept in registration order
//! - Arcs run from a dependent element to the element it depends upon
//!
//! A topological sort emits every arc target before its source, so each
//! element lands after everything it depends upon.
//!
//! # Design Decisions
//!
//! 1. Arcs may only be added between registered vertices. A bad reference is
//!    reported when the arc is added, not when the graph is sorted.
//!
//! 2. Registration order and arc order are both preserved, and the sort
//!    follows them. The output is a pure function of how the graph was built.
//!
//! 3. Cycle detection follows the current descent path only. Reaching an
//!    already emitted vertex from a second branch is not a cycle.

mod chain;
mod digraph;
mod path;
mod vertex;

pub use chain::Chain;
pub use digraph::Graph;
