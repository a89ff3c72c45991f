//! Per-node frontier maintenance.
//!
//! Candidates arriving at one node in one tick pass four filters in order:
//!
//! 1. **Feasibility** - every constraint component within the node's ceiling
//! 2. **Archive** - objective not dominated by any path already at the destination
//! 3. **Siblings** - `objective ‖ constraint` not dominated by another survivor
//!    of steps 1-2 arriving at the same node this tick
//! 4. **Frontier** - `objective ‖ constraint` not dominated by a ripple already
//!    accepted at the node
//!
//! The survivors are returned in arrival order for the session to accept.

use crate::dominance::{dominates, jointly_dominates};
use crate::network::CostVector;

use super::types::{Candidate, Ripple, RippleId, SearchStats};

/// Filter one node's incoming candidates.
///
/// # Arguments
/// * `candidates` - Partial paths that reached the node this tick
/// * `ceiling` - The node's constraint ceiling
/// * `archive` - Objective vectors of every ripple accepted at the destination
/// * `frontier` - Ripples already accepted at the node
/// * `ripples` - All ripple records, indexed by id
/// * `stats` - Pruning counters to update
pub(crate) fn filter_candidates(
    mut candidates: Vec<Candidate>,
    ceiling: &[f64],
    archive: &[CostVector],
    frontier: &[RippleId],
    ripples: &[Ripple],
    stats: &mut SearchStats,
) -> Vec<Candidate> {
    let before = candidates.len();
    candidates.retain(|c| within_ceiling(&c.constraint, ceiling));
    stats.pruned_infeasible += before - candidates.len();

    let before = candidates.len();
    candidates.retain(|c| !archive.iter().any(|obj| dominates(obj, &c.objective)));
    stats.pruned_by_archive += before - candidates.len();

    let dominated: Vec<bool> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            candidates.iter().enumerate().any(|(j, other)| {
                i != j
                    && jointly_dominates(
                        &other.objective,
                        &other.constraint,
                        &c.objective,
                        &c.constraint,
                    )
            })
        })
        .collect();
    let before = candidates.len();
    let mut flags = dominated.into_iter();
    candidates.retain(|_| !flags.next().unwrap_or(false));
    stats.pruned_by_siblings += before - candidates.len();

    let before = candidates.len();
    candidates.retain(|c| {
        !frontier.iter().any(|&id| {
            let accepted = &ripples[id];
            jointly_dominates(
                &accepted.objective,
                &accepted.constraint,
                &c.objective,
                &c.constraint,
            )
        })
    });
    stats.pruned_by_frontier += before - candidates.len();

    candidates
}

#[inline]
fn within_ceiling(constraint: &[f64], ceiling: &[f64]) -> bool {
    constraint.iter().zip(ceiling).all(|(value, limit)| value <= limit)
}
