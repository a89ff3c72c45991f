//! Topology indexing for cost networks.
//!
//! Turns the caller's node -> neighbor -> cost mapping into a validated,
//! index-addressed adjacency list. Outgoing edges of every node are kept in
//! ascending target order, which makes neighbor iteration (and therefore
//! ripple id assignment) deterministic.

mod builder;
mod topology;
mod types;


pub use builder::NetworkBuilder;
pub use topology::Network;
pub use types::{CostVector, EdgeCost, NodeIndex, OutEdge, RawGraph};

pub(crate) use types::add;
