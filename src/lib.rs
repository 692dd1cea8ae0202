//! # dagraph
//!
//! A directed graph over opaque, hashable vertex labels, with cycle detection
//! and topological sorting.
//!
//! Both questions have two interchangeable algorithms: a depth-first walk and
//! Kahn's in-degree queue. The graph does not reject cycles when edges are
//! added, so despite the name [`Dag`] is only acyclic once a check says so.
//!
//! ```
//! use dagraph::Dag;
//!
//! let mut dag = Dag::new();
//! dag.add_edge("A", "B");
//! dag.add_edge("B", "C");
//! assert!(!dag.has_cycle());
//! assert_eq!(dag.topological_sort().unwrap(), vec!["A", "B", "C"]);
//!
//! dag.add_edge("C", "A");
//! assert!(dag.has_cycle());
//! assert!(dag.topological_sort().is_err());
//! ```

pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod random;
pub mod render;

pub use error::{GraphError, Result};
pub use graph::{CycleStrategy, Dag, SortStrategy};
pub use render::Snapshot;
