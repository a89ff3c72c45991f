//! Reverse single-source shortest paths per constraint dimension.

use std::collections::BinaryHeap;

use crate::network::{Network, NodeIndex};

use super::node::HeapEntry;

/// Remaining cost of a node that cannot reach the destination.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Incoming edges of every node as `(tail, constraint cost)` on one dimension.
fn reversed_adjacency(network: &Network, dimension: usize) -> Vec<Vec<(NodeIndex, f64)>> {
    let mut reversed = vec![Vec::new(); network.node_count()];
    for (from, edge) in network.edges() {
        reversed[edge.target].push((from, edge.cost.constraint[dimension]));
    }
    reversed
}

/// Minimum cost on constraint `dimension` from every node to `destination`.
///
/// Runs Dijkstra from `destination` over reversed edges. Nodes that cannot
/// reach the destination get [`UNREACHABLE`].
///
/// # Panics
/// Never for a validated network and `dimension < network.constraint_dims()`.
pub fn reverse_shortest_costs(
    network: &Network,
    destination: NodeIndex,
    dimension: usize,
) -> Vec<f64> {
    let reversed = reversed_adjacency(network, dimension);
    let mut dist = vec![UNREACHABLE; network.node_count()];
    let mut settled = vec![false; network.node_count()];
    let mut open_set = BinaryHeap::new();

    dist[destination] = 0.0;
    open_set.push(HeapEntry {
        cost: 0.0,
        node: destination,
    });

    while let Some(HeapEntry { cost, node }) = open_set.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;

        for &(tail, weight) in &reversed[node] {
            let alt = cost + weight;
            if alt < dist[tail] {
                dist[tail] = alt;
                open_set.push(HeapEntry { cost: alt, node: tail });
            }
        }
    }

    dist
}
