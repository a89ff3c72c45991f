//! Per-node constraint ceilings.

use rayon::prelude::*;

use crate::network::{Network, NodeIndex};

use super::dijkstra::{reverse_shortest_costs, UNREACHABLE};

/// Maximum accumulated constraint cost per node and dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintCeilings {
    /// `per_node[node][dimension]`.
    per_node: Vec<Vec<f64>>,
}

impl ConstraintCeilings {
    /// Ceiling vector of `node`.
    #[must_use]
    pub fn ceiling(&self, node: NodeIndex) -> &[f64] {
        &self.per_node[node]
    }

    /// Whether a partial path carrying `constraint` at `node` may still finish
    /// within budget.
    #[must_use]
    pub fn admits(&self, node: NodeIndex, constraint: &[f64]) -> bool {
        constraint
            .iter()
            .zip(self.ceiling(node))
            .all(|(value, ceiling)| value <= ceiling)
    }
}

/// Compute ceilings for every node.
///
/// `ceiling[node][c] = budget[c] - min_remaining[node][c]`; nodes that cannot
/// reach `destination` get `-inf` on every dimension.
///
/// # Arguments
/// * `network` - Validated network
/// * `destination` - Query destination
/// * `budget` - Constraint budget, one entry per constraint dimension
/// * `parallel` - Run the per-dimension searches on the rayon pool
///
/// # Panics
/// If `budget.len()` differs from `network.constraint_dims()` or
/// `destination` is not a node of `network`. [`TbsSearch::run`] validates both
/// before calling this.
///
/// [`TbsSearch::run`]: crate::search::TbsSearch::run
pub fn compute_ceilings(
    network: &Network,
    destination: NodeIndex,
    budget: &[f64],
    parallel: bool,
) -> ConstraintCeilings {
    let dims = budget.len();
    assert_eq!(
        dims,
        network.constraint_dims(),
        "budget length must equal the network's constraint dimensionality"
    );

    let remaining: Vec<Vec<f64>> = if parallel {
        (0..dims)
            .into_par_iter()
            .map(|dim| reverse_shortest_costs(network, destination, dim))
            .collect()
    } else {
        (0..dims)
            .map(|dim| reverse_shortest_costs(network, destination, dim))
            .collect()
    };

    let per_node: Vec<Vec<f64>> = (0..network.node_count())
        .map(|node| {
            budget
                .iter()
                .zip(&remaining)
                .map(|(limit, dist)| {
                    if dist[node] == UNREACHABLE {
                        f64::NEG_INFINITY
                    } else {
                        limit - dist[node]
                    }
                })
                .collect()
        })
        .collect();

    tracing::trace!(
        destination,
        dims,
        parallel,
        unreachable = remaining
            .first()
            .map_or(0, |dist| dist.iter().filter(|d| **d == UNREACHABLE).count()),
        "Constraint ceilings computed"
    );

    ConstraintCeilings { per_node }
}
