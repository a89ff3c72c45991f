//! Rate selection types.

use crate::network::NodeIndex;

/// Observed `[min, max]` of one objective dimension across all edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionRange {
    pub min: f64,
    pub max: f64,
}

impl DimensionRange {
    /// Uniformity ratio `max / min`, or `None` if the minimum is zero.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        (self.min > 0.0).then(|| self.max / self.min)
    }
}

/// Spreading speed plus the scalar network that drives simulated time.
#[derive(Debug, Clone)]
pub struct SpreadingRate {
    /// Radius increment per tick.
    pub speed: f64,

    /// Objective dimension used as the surrogate edge length.
    pub dimension: usize,

    /// Scaled length of every edge, parallel to `Network::neighbors`.
    pub(crate) scaled: Vec<Vec<f64>>,
}

impl SpreadingRate {
    /// Scaled lengths of the outgoing edges of `node`, in neighbor order.
    #[must_use]
    pub fn lengths(&self, node: NodeIndex) -> &[f64] {
        self.scaled.get(node).map_or(&[], Vec::as_slice)
    }
}
