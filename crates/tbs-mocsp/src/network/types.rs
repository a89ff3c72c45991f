//! Network value types.
//!
//! Plain data carried by every edge of the input graph plus the raw
//! node-to-neighbor mapping callers hand to [`Network::new`](super::Network::new).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dense node index in `0..N`.
pub type NodeIndex = usize;

/// Ordered cost components (objective or constraint).
pub type CostVector = Vec<f64>;

/// Raw input graph: node -> neighbor -> edge cost.
///
/// Every node `0..N-1` must be a key, including isolated nodes (which map to
/// an empty neighbor map).
pub type RawGraph = BTreeMap<NodeIndex, BTreeMap<NodeIndex, EdgeCost>>;

/// Cost vectors attached to a directed edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeCost {
    /// Objective components, jointly minimized (length F).
    pub objective: CostVector,

    /// Constraint components, bounded by the query budget (length C).
    pub constraint: CostVector,
}

impl EdgeCost {
    /// Create an edge cost from its objective and constraint vectors.
    pub fn new(objective: CostVector, constraint: CostVector) -> Self {
        Self {
            objective,
            constraint,
        }
    }

    /// All-zero cost with the given dimensionality.
    #[must_use]
    pub fn zero(objective_dims: usize, constraint_dims: usize) -> Self {
        Self {
            objective: vec![0.0; objective_dims],
            constraint: vec![0.0; constraint_dims],
        }
    }

    /// Component-wise accumulate `other` into `self`.
    pub(crate) fn accumulate(&mut self, other: &EdgeCost) {
        add_assign(&mut self.objective, &other.objective);
        add_assign(&mut self.constraint, &other.constraint);
    }
}

/// Outgoing edge in the indexed topology.
#[derive(Debug, Clone, PartialEq)]
pub struct OutEdge {
    /// Head node of the edge.
    pub target: NodeIndex,

    /// Edge costs.
    pub cost: EdgeCost,
}

/// `lhs[i] += rhs[i]` over the common prefix.
#[inline]
pub(crate) fn add_assign(lhs: &mut [f64], rhs: &[f64]) {
    for (l, r) in lhs.iter_mut().zip(rhs) {
        *l += r;
    }
}

/// Component-wise sum into a fresh vector.
#[inline]
pub(crate) fn add(lhs: &[f64], rhs: &[f64]) -> CostVector {
    lhs.iter().zip(rhs).map(|(l, r)| l + r).collect()
}
