//! Topo Core
//!
//! This crate provides stable, cycle-detecting topological ordering of a
//! finite set of elements. It implements:
//!
//! - A directed graph over any `Eq + Hash` element type
//! - Depth-first topological sorting with exact cycle reporting
//! - An in-place sorter driven by child/parent dependency pairs
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Vertex and arc storage, cycle chains, and the sort itself
//! - `dependency`: Ordering constraints and dependency lists
//! - `sort`: The in-place dependency sorter built on `graph`
//! - `error`: The error type shared by all of the above
//!
//! # Example
//!
//! ```rust
//! use topo_core::{sort, Dependencies};
//!
//! let mut plugins = vec!["render", "audio", "core", "input"];
//!
//! let mut deps = Dependencies::new();
//! deps.push("render", "core");
//! deps.push("audio", "core");
//! deps.push("input", "render");
//!
//! sort(&mut plugins, &deps).unwrap();
//! assert_eq!(plugins, vec!["core", "render", "audio", "input"]);
//! ```

pub mod dependency;
pub mod error;
pub mod graph;
pub mod sort;

pub use dependency::{Dependencies, Dependency};
pub use error::{ArcSide, TopoError, TopoResult};
pub use graph::{Chain, Graph};
pub use sort::sort;
