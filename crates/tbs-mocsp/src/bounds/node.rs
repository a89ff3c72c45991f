//! Dijkstra priority queue entry.
//!
//! Implements ordering for BinaryHeap min-heap behavior.

use std::cmp::Ordering;

use crate::network::NodeIndex;

/// Entry in the Dijkstra open set.
///
/// Ordering is reversed so BinaryHeap (max-heap) pops the smallest cost.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry {
    pub cost: f64,
    pub node: NodeIndex,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Costs are validated finite, total_cmp only orders the signed zeros.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}
