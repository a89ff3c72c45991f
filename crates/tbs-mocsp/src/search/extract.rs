//! Final Pareto set extraction at the destination.

use crate::dominance::dominates;

use super::types::{ParetoPath, Ripple, RippleId};

/// Keep destination ripples whose objective no other accepted ripple dominates.
///
/// Records with identical objectives are all kept. Output follows acceptance
/// order.
pub(crate) fn pareto_paths(frontier: &[RippleId], ripples: &[Ripple]) -> Vec<ParetoPath> {
    frontier
        .iter()
        .filter(|&&id| {
            let objective = &ripples[id].objective;
            !frontier
                .iter()
                .any(|&other| other != id && dominates(&ripples[other].objective, objective))
        })
        .map(|&id| ParetoPath::from(&ripples[id]))
        .collect()
}
