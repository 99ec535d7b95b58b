//! Error types for graph construction and sorting
//!
//! All failures are returned as a single generic [`TopoError`], which keeps
//! the offending element values so callers can match on them. The rendered
//! message is available whenever the element type implements `Display`.

use std::fmt;

use thiserror::Error;

use crate::graph::Chain;

/// Result type for graph and sort operations over elements of type `T`.
pub type TopoResult<R, T> = Result<R, TopoError<T>>;

/// Which endpoint of an arc (or dependency) failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcSide {
    /// The arc's origin; the dependency's child.
    Source,
    /// The arc's target; the dependency's parent.
    Destination,
}

impl fmt::Display for ArcSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArcSide::Source => f.write_str("source"),
            ArcSide::Destination => f.write_str("destination"),
        }
    }
}

/// Errors that can occur while building or sorting a graph
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopoError<T> {
    /// An arc referenced an element that was never registered as a vertex
    #[error("{side} vertex {vertex} not found in graph")]
    MissingVertex {
        /// Which end of the arc was missing
        side: ArcSide,
        /// The unregistered element
        vertex: T,
    },

    /// The arcs form a cycle, so no valid ordering exists
    #[error("cycle error: {cycle}")]
    CycleDetected {
        /// The offending chain, starting and ending on the same vertex
        cycle: Chain<T>,
    },

    /// The sorted result does not cover the input one-to-one.
    ///
    /// Only reachable when the input holds duplicate elements, since those
    /// collapse into a single vertex.
    #[error(
        "unexpected mismatch between original and sorted data: \
         expected {expected} elements, sorted {actual}"
    )]
    Mismatch {
        /// Number of elements handed in
        expected: usize,
        /// Number of elements the sort produced
        actual: usize,
    },
}

impl<T> TopoError<T> {
    /// Creates a missing vertex error
    pub fn missing_vertex(side: ArcSide, vertex: T) -> Self {
        Self::MissingVertex { side, vertex }
    }

    /// Creates a cycle detected error from the offending chain
    pub fn cycle(cycle: impl Into<Chain<T>>) -> Self {
        Self::CycleDetected {
            cycle: cycle.into(),
        }
    }

    /// Creates a length mismatch error
    pub fn mismatch(expected: usize, actual: usize) -> Self {
        Self::Mismatch { expected, actual }
    }

    /// Returns true if this error reports a cycle.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CycleDetected { .. })
    }

    /// Returns the cycle chain, if this error reports one.
    pub fn cycle_chain(&self) -> Option<&Chain<T>> {
        match self {
            Self::CycleDetected { cycle } => Some(cycle),
            _ => None,
        }
    }
}
