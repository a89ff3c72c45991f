//! Incremental network construction.

use crate::error::MocspResult;

use super::topology::Network;
use super::types::{CostVector, EdgeCost, NodeIndex, RawGraph};

/// Builder that collects edges and produces a validated [`Network`].
///
/// All nodes `0..node_count` are registered up front, so isolated nodes need
/// no special handling. Adding an edge twice keeps the last cost.
///
/// # Example
///
/// ```
/// use tbs_mocsp::network::Network;
///
/// let network = Network::builder(3)
///     .edge(0, 1, vec![2.0], vec![1.0])
///     .bidirectional_edge(1, 2, vec![3.0], vec![1.0])
///     .build()
///     .expect("valid network");
/// assert_eq!(network.edge_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    graph: RawGraph,
}

impl NetworkBuilder {
    /// Create a builder with `node_count` isolated nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            graph: (0..node_count).map(|node| (node, Default::default())).collect(),
        }
    }

    /// Builder: add a directed edge.
    #[must_use]
    pub fn edge(
        mut self,
        from: NodeIndex,
        to: NodeIndex,
        objective: CostVector,
        constraint: CostVector,
    ) -> Self {
        self.graph
            .entry(from)
            .or_default()
            .insert(to, EdgeCost::new(objective, constraint));
        self
    }

    /// Builder: add the same cost in both directions.
    #[must_use]
    pub fn bidirectional_edge(
        self,
        a: NodeIndex,
        b: NodeIndex,
        objective: CostVector,
        constraint: CostVector,
    ) -> Self {
        self.edge(a, b, objective.clone(), constraint.clone())
            .edge(b, a, objective, constraint)
    }

    /// The raw graph collected so far.
    #[must_use]
    pub fn into_raw(self) -> RawGraph {
        self.graph
    }

    /// Validate and index the collected graph.
    pub fn build(self) -> MocspResult<Network> {
        Network::new(self.graph)
    }
}
