//! Time-based ripple-spreading search for the Multi-Objective Constrained
//! Shortest Path problem (MOCSP).
//!
//! Every edge of a directed network carries an objective vector (jointly
//! minimized) and a constraint vector (bounded by a per-dimension budget).
//! A query returns the full Pareto frontier of feasible source-to-destination
//! paths: no returned path is beaten on every objective by another feasible
//! path.
//!
//! # Architecture
//!
//! - **network**: Validated adjacency index built from the raw cost map
//! - **rate**: Surrogate dimension and spreading speed selection
//! - **bounds**: Reverse Dijkstra per constraint dimension -> node ceilings
//! - **search**: Wavefront simulation, frontier filtering, Pareto extraction
//! - **dominance**: Pareto dominance predicates
//! - **config**: Search configuration (TOML loadable)
//! - **error**: Error handling with MocspError
//!
//! # Example
//!
//! ```
//! use tbs_mocsp::network::Network;
//! use tbs_mocsp::solve;
//!
//! let graph = Network::builder(3)
//!     .bidirectional_edge(0, 1, vec![4.0, 1.0], vec![2.0])
//!     .bidirectional_edge(1, 2, vec![4.0, 1.0], vec![2.0])
//!     .bidirectional_edge(0, 2, vec![3.0, 5.0], vec![1.0])
//!     .into_raw();
//!
//! let paths = solve(&graph, 0, 2, &[4.0])?;
//! assert_eq!(paths.len(), 2);
//! # Ok::<(), tbs_mocsp::MocspError>(())
//! ```

pub mod bounds;
pub mod config;
pub mod dominance;
pub mod error;
pub mod network;
pub mod rate;
pub mod search;

pub use config::SearchConfig;
pub use error::{MocspError, MocspResult};
pub use network::{CostVector, EdgeCost, Network, NetworkBuilder, NodeIndex, RawGraph};
pub use search::{
    solve, solve_with_config, ParetoPath, Query, SearchOutcome, SearchStats, TbsSearch,
};
