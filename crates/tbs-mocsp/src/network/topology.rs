//! Validated adjacency index.
//!
//! [`Network`] is built once from a [`RawGraph`] and is read-only afterwards.
//! All structural validation happens here so the search never has to deal
//! with missing keys or ragged cost vectors.

use crate::error::{MocspError, MocspResult};

use super::builder::NetworkBuilder;
use super::types::{EdgeCost, NodeIndex, OutEdge, RawGraph};

/// Directed network with per-node outgoing edges in ascending target order.
#[derive(Debug, Clone)]
pub struct Network {
    adjacency: Vec<Vec<OutEdge>>,
    objective_dims: usize,
    constraint_dims: usize,
    edge_count: usize,
}

impl Network {
    /// Index and validate a raw graph.
    ///
    /// # Errors
    /// * `MissingNode` - keys are not exactly `0..N-1`
    /// * `NodeNotFound` - an edge targets a node that is not a key
    /// * `DimensionMismatch` - objective/constraint lengths differ between edges
    /// * `InvalidCost` - a component is negative, NaN or infinite
    pub fn new(graph: RawGraph) -> MocspResult<Self> {
        let node_count = graph.len();

        // BTreeMap keys are sorted and unique, so a gap shows up as a mismatch.
        for (expected, &key) in graph.keys().enumerate() {
            if key != expected {
                return Err(MocspError::MissingNode(expected));
            }
        }

        let mut dims: Option<(usize, usize)> = None;
        let mut adjacency = Vec::with_capacity(node_count);
        let mut edge_count = 0;

        for (from, neighbors) in graph {
            let mut out = Vec::with_capacity(neighbors.len());
            for (to, cost) in neighbors {
                if to >= node_count {
                    return Err(MocspError::NodeNotFound { from, to });
                }

                let (objective_dims, constraint_dims) =
                    *dims.get_or_insert((cost.objective.len(), cost.constraint.len()));
                check_dims(from, to, "objective", objective_dims, cost.objective.len())?;
                check_dims(from, to, "constraint", constraint_dims, cost.constraint.len())?;
                check_components(from, to, &cost)?;

                out.push(OutEdge { target: to, cost });
                edge_count += 1;
            }
            adjacency.push(out);
        }

        let (objective_dims, constraint_dims) = dims.unwrap_or((0, 0));

        tracing::debug!(
            nodes = node_count,
            edges = edge_count,
            objective_dims,
            constraint_dims,
            "Network indexed"
        );

        Ok(Self {
            adjacency,
            objective_dims,
            constraint_dims,
            edge_count,
        })
    }

    /// Start a builder for a network with `node_count` nodes.
    #[must_use]
    pub fn builder(node_count: usize) -> NetworkBuilder {
        NetworkBuilder::new(node_count)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Objective dimensionality F (0 for an edgeless network).
    #[must_use]
    pub fn objective_dims(&self) -> usize {
        self.objective_dims
    }

    /// Constraint dimensionality C (0 for an edgeless network).
    #[must_use]
    pub fn constraint_dims(&self) -> usize {
        self.constraint_dims
    }

    /// Whether `node` is a valid index.
    #[must_use]
    pub fn contains(&self, node: NodeIndex) -> bool {
        node < self.adjacency.len()
    }

    /// Outgoing edges of `node`, empty for out-of-range indices.
    #[must_use]
    pub fn neighbors(&self, node: NodeIndex) -> &[OutEdge] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Cost of the edge `from -> to`, if present.
    #[must_use]
    pub fn edge(&self, from: NodeIndex, to: NodeIndex) -> Option<&EdgeCost> {
        self.neighbors(from)
            .binary_search_by_key(&to, |edge| edge.target)
            .ok()
            .map(|idx| &self.adjacency[from][idx].cost)
    }

    /// Iterate all edges as `(from, edge)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, &OutEdge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, out)| out.iter().map(move |edge| (from, edge)))
    }

    /// Recompute the cumulative cost of a node sequence.
    ///
    /// Returns `None` if any consecutive pair is not an edge. A single-node
    /// path has zero cost.
    #[must_use]
    pub fn path_cost(&self, path: &[NodeIndex]) -> Option<EdgeCost> {
        let mut total = EdgeCost::zero(self.objective_dims, self.constraint_dims);
        for hop in path.windows(2) {
            total.accumulate(self.edge(hop[0], hop[1])?);
        }
        Some(total)
    }
}

impl TryFrom<RawGraph> for Network {
    type Error = MocspError;

    fn try_from(graph: RawGraph) -> MocspResult<Self> {
        Network::new(graph)
    }
}

fn check_dims(
    from: NodeIndex,
    to: NodeIndex,
    vector: &'static str,
    expected: usize,
    actual: usize,
) -> MocspResult<()> {
    if expected != actual {
        return Err(MocspError::DimensionMismatch {
            from,
            to,
            vector,
            expected,
            actual,
        });
    }
    Ok(())
}

fn check_components(from: NodeIndex, to: NodeIndex, cost: &EdgeCost) -> MocspResult<()> {
    match cost
        .objective
        .iter()
        .chain(&cost.constraint)
        .find(|value| !value.is_finite() || **value < 0.0)
    {
        Some(&value) => Err(MocspError::InvalidCost { from, to, value }),
        None => Ok(()),
    }
}
