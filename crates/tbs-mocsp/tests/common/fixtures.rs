//! Deterministic network fixtures.
//!
//! Random networks use `ChaCha8Rng` so the same seed always produces the same
//! network on every platform.

#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tbs_mocsp::{Network, NetworkBuilder, Query};

/// Five nodes, symmetric edges, one objective and one constraint.
pub fn five_node_network() -> Network {
    Network::builder(5)
        .bidirectional_edge(0, 1, vec![31.0], vec![4.0])
        .bidirectional_edge(0, 2, vec![22.0], vec![3.0])
        .bidirectional_edge(0, 3, vec![32.0], vec![6.0])
        .bidirectional_edge(1, 2, vec![16.0], vec![3.0])
        .bidirectional_edge(1, 4, vec![29.0], vec![1.0])
        .bidirectional_edge(2, 3, vec![17.0], vec![9.0])
        .bidirectional_edge(2, 4, vec![25.0], vec![2.0])
        .bidirectional_edge(3, 4, vec![21.0], vec![5.0])
        .build()
        .expect("five node network")
}

/// Same topology and constraints as [`five_node_network`] with a second,
/// conflicting objective.
pub fn two_objective_network() -> Network {
    Network::builder(5)
        .bidirectional_edge(0, 1, vec![31.0, 1.0], vec![4.0])
        .bidirectional_edge(0, 2, vec![22.0, 7.0], vec![3.0])
        .bidirectional_edge(0, 3, vec![32.0, 4.0], vec![6.0])
        .bidirectional_edge(1, 2, vec![16.0, 2.0], vec![3.0])
        .bidirectional_edge(1, 4, vec![29.0, 6.0], vec![1.0])
        .bidirectional_edge(2, 3, vec![17.0, 4.0], vec![9.0])
        .bidirectional_edge(2, 4, vec![25.0, 1.0], vec![2.0])
        .bidirectional_edge(3, 4, vec![21.0, 2.0], vec![5.0])
        .build()
        .expect("two objective network")
}

/// Shape of a random network.
#[derive(Debug, Clone, Copy)]
pub struct RandomShape {
    pub nodes: usize,
    pub edge_probability: f64,
    pub objective_dims: usize,
    pub constraint_dims: usize,
    /// Objective components are drawn from `1..=max_objective`.
    pub max_objective: u32,
    /// Constraint components are drawn from `0..=max_constraint`.
    pub max_constraint: u32,
}

impl Default for RandomShape {
    fn default() -> Self {
        Self {
            nodes: 7,
            edge_probability: 0.35,
            objective_dims: 2,
            constraint_dims: 2,
            max_objective: 9,
            max_constraint: 5,
        }
    }
}

/// Random directed network with integer costs.
///
/// Node 0 always has at least one outgoing edge.
pub fn random_network(seed: u64, shape: RandomShape) -> Network {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = Network::builder(shape.nodes);

    let mut source_has_edge = false;
    for from in 0..shape.nodes {
        for to in 0..shape.nodes {
            if from != to && rng.gen_bool(shape.edge_probability) {
                builder = random_edge(&mut rng, builder, from, to, shape);
                source_has_edge |= from == 0;
            }
        }
    }
    if !source_has_edge {
        let to = rng.gen_range(1..shape.nodes);
        builder = random_edge(&mut rng, builder, 0, to, shape);
    }

    builder.build().expect("random network")
}

/// Random budget for a query from node 0 to the last node.
pub fn random_query(seed: u64, shape: RandomShape) -> Query {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(7));
    let budget = (0..shape.constraint_dims)
        .map(|_| f64::from(rng.gen_range(shape.max_constraint..=shape.max_constraint * 3)))
        .collect();
    Query::new(0, shape.nodes - 1, budget)
}

fn random_edge(
    rng: &mut ChaCha8Rng,
    builder: NetworkBuilder,
    from: usize,
    to: usize,
    shape: RandomShape,
) -> NetworkBuilder {
    let objective = (0..shape.objective_dims)
        .map(|_| f64::from(rng.gen_range(1..=shape.max_objective)))
        .collect();
    let constraint = (0..shape.constraint_dims)
        .map(|_| f64::from(rng.gen_range(0..=shape.max_constraint)))
        .collect();
    builder.edge(from, to, objective, constraint)
}
