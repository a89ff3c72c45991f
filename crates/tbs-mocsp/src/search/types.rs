//! Search types: queries, ripples and results.

use serde::{Deserialize, Serialize};

use crate::network::{add, CostVector, NodeIndex, OutEdge};

/// Stable ripple identifier, assigned on acceptance and never reused.
pub type RippleId = usize;

/// A constrained multi-objective path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Start node.
    pub source: NodeIndex,

    /// Target node.
    pub destination: NodeIndex,

    /// Inclusive upper bound on each cumulative constraint dimension.
    pub budget: CostVector,
}

impl Query {
    /// Create a query.
    pub fn new(source: NodeIndex, destination: NodeIndex, budget: CostVector) -> Self {
        Self {
            source,
            destination,
            budget,
        }
    }
}

/// An accepted partial path spreading (or formerly spreading) from its epicenter.
///
/// Only `radius` changes after creation, and only while the ripple is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub id: RippleId,

    /// Node the ripple spreads from (last node of `path`).
    pub epicenter: NodeIndex,

    /// Simulated distance travelled from the epicenter, in surrogate units.
    pub radius: f64,

    /// Visited nodes, source first, no repeats.
    pub path: Vec<NodeIndex>,

    pub objective: CostVector,
    pub constraint: CostVector,
}

impl Ripple {
    /// The initial ripple at the source with zero costs.
    pub(crate) fn origin(
        source: NodeIndex,
        objective_dims: usize,
        constraint_dims: usize,
    ) -> Self {
        Self {
            id: 0,
            epicenter: source,
            radius: 0.0,
            path: vec![source],
            objective: vec![0.0; objective_dims],
            constraint: vec![0.0; constraint_dims],
        }
    }

    /// Whether `node` is already on this ripple's path.
    #[inline]
    pub(crate) fn visits(&self, node: NodeIndex) -> bool {
        self.path.contains(&node)
    }

    /// Candidate produced when this ripple reaches `edge.target`.
    ///
    /// `overshoot` is how far the wave has already travelled past the
    /// neighbor; it becomes the candidate's initial radius.
    pub(crate) fn extend(&self, edge: &OutEdge, overshoot: f64) -> Candidate {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(edge.target);

        Candidate {
            node: edge.target,
            path,
            radius: overshoot,
            objective: add(&self.objective, &edge.cost.objective),
            constraint: add(&self.constraint, &edge.cost.constraint),
        }
    }
}

/// A partial path that reached a node this tick and awaits filtering.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub node: NodeIndex,
    pub path: Vec<NodeIndex>,
    pub radius: f64,
    pub objective: CostVector,
    pub constraint: CostVector,
}

impl Candidate {
    pub(crate) fn into_ripple(self, id: RippleId) -> Ripple {
        Ripple {
            id,
            epicenter: self.node,
            radius: self.radius,
            path: self.path,
            objective: self.objective,
            constraint: self.constraint,
        }
    }
}

/// One Pareto-optimal feasible path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoPath {
    /// Node sequence from source to destination.
    pub path: Vec<NodeIndex>,

    /// Cumulative objective vector.
    pub objective: CostVector,

    /// Cumulative constraint vector.
    pub constraint: CostVector,
}

impl From<&Ripple> for ParetoPath {
    fn from(ripple: &Ripple) -> Self {
        Self {
            path: ripple.path.clone(),
            objective: ripple.objective.clone(),
            constraint: ripple.constraint.clone(),
        }
    }
}

/// Counters collected while a query runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Simulated time steps.
    pub ticks: u64,

    /// Accepted ripples, including the origin.
    pub ripples_created: usize,

    /// Largest active set observed at the end of a tick.
    pub peak_active: usize,

    /// Partial paths generated by spreading.
    pub candidates_generated: usize,

    /// Candidates over a node's constraint ceiling.
    pub pruned_infeasible: usize,

    /// Candidates dominated by a path already at the destination.
    pub pruned_by_archive: usize,

    /// Candidates dominated by a sibling arriving at the same node and tick.
    pub pruned_by_siblings: usize,

    /// Candidates dominated by the node's existing frontier.
    pub pruned_by_frontier: usize,

    /// Ripples accepted at the destination.
    pub destination_arrivals: usize,

    /// Records in the final Pareto set.
    pub pareto_paths: usize,
}

/// Full result of a search: the Pareto set plus run metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Non-dominated feasible paths, in acceptance order.
    pub paths: Vec<ParetoPath>,

    /// Run counters.
    pub stats: SearchStats,

    /// Ripple spreading speed.
    pub speed: f64,

    /// Objective dimension that drove simulated time.
    pub surrogate_dimension: usize,
}

impl SearchOutcome {
    /// Whether no feasible path was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
