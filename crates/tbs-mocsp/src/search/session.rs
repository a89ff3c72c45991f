//! Per-query wavefront simulation.
//!
//! A [`SearchSession`] owns every ripple record, the per-node frontiers
//! (Omega), the destination objective archive and the active set for the
//! lifetime of one query. It is created when the query starts and consumed by
//! [`SearchSession::run`].
//!
//! # Tick
//!
//! 1. Every active ripple's radius grows by the spreading speed `s`.
//! 2. A neighbor `v` off the ripple's path with scaled length `len` is reached
//!    when `len <= radius < len + s`; the extension becomes a candidate at `v`
//!    with initial radius `radius - len`.
//! 3. A ripple whose radius has passed every relevant neighbor retires. The
//!    active set is compacted in place, survivors keep their order.
//! 4. Destination candidates are filtered first and archived immediately, so
//!    candidates for other nodes in the same tick are pruned against them.
//!    Destination ripples never spread further.
//! 5. Candidates for other nodes are filtered in ascending node order and the
//!    survivors join the active set.
//!
//! Radii grow by repeated addition of `s`. With integer edge lengths this is
//! exact; with fractional lengths the accumulated rounding error can push a
//! radius just past `len + s` and skip that neighbor.

use std::collections::BTreeMap;

use crate::bounds::ConstraintCeilings;
use crate::network::{CostVector, Network, NodeIndex};
use crate::rate::SpreadingRate;

use super::extract::pareto_paths;
use super::frontier::filter_candidates;
use super::types::{Candidate, ParetoPath, Ripple, RippleId, SearchStats};

pub(crate) struct SearchSession<'a> {
    network: &'a Network,
    rate: &'a SpreadingRate,
    ceilings: &'a ConstraintCeilings,
    destination: NodeIndex,
    retire_exhausted: bool,

    ripples: Vec<Ripple>,
    active: Vec<RippleId>,
    omega: Vec<Vec<RippleId>>,
    archive: Vec<CostVector>,
    stats: SearchStats,
}

impl<'a> SearchSession<'a> {
    /// Seed a session with the origin ripple at `source`.
    pub(crate) fn new(
        network: &'a Network,
        rate: &'a SpreadingRate,
        ceilings: &'a ConstraintCeilings,
        source: NodeIndex,
        destination: NodeIndex,
        retire_exhausted: bool,
    ) -> Self {
        let origin = Ripple::origin(source, network.objective_dims(), network.constraint_dims());
        let mut omega = vec![Vec::new(); network.node_count()];
        omega[source].push(origin.id);

        Self {
            network,
            rate,
            ceilings,
            destination,
            retire_exhausted,
            active: vec![origin.id],
            ripples: vec![origin],
            omega,
            archive: Vec::new(),
            stats: SearchStats {
                ripples_created: 1,
                peak_active: 1,
                ..SearchStats::default()
            },
        }
    }

    /// Simulate until no ripple is active, then extract the Pareto set.
    pub(crate) fn run(mut self) -> (Vec<ParetoPath>, SearchStats) {
        while !self.active.is_empty() {
            self.tick();
        }

        let paths = pareto_paths(&self.omega[self.destination], &self.ripples);
        self.stats.pareto_paths = paths.len();
        (paths, self.stats)
    }

    fn tick(&mut self) {
        self.stats.ticks += 1;
        let mut incoming = self.spread();
        let arrivals: usize = incoming.values().map(Vec::len).sum();

        if let Some(candidates) = incoming.remove(&self.destination) {
            self.admit(self.destination, candidates);
        }
        for (node, candidates) in incoming {
            self.admit(node, candidates);
        }

        self.stats.peak_active = self.stats.peak_active.max(self.active.len());

        tracing::trace!(
            tick = self.stats.ticks,
            active = self.active.len(),
            arrivals,
            ripples = self.ripples.len(),
            "Tick complete"
        );
    }

    /// Grow every active ripple, collect candidates by node and retire
    /// ripples that have nothing left to reach.
    fn spread(&mut self) -> BTreeMap<NodeIndex, Vec<Candidate>> {
        let speed = self.rate.speed;
        let mut incoming: BTreeMap<NodeIndex, Vec<Candidate>> = BTreeMap::new();

        let active = std::mem::take(&mut self.active);
        let mut still_active = Vec::with_capacity(active.len());

        for id in active {
            self.ripples[id].radius += speed;
            let ripple = &self.ripples[id];
            let radius = ripple.radius;
            let mut keep = false;

            let edges = self.network.neighbors(ripple.epicenter);
            let lengths = self.rate.lengths(ripple.epicenter);
            for (edge, &length) in edges.iter().zip(lengths) {
                let visited = ripple.visits(edge.target);
                if !visited && length <= radius && radius < length + speed {
                    incoming
                        .entry(edge.target)
                        .or_default()
                        .push(ripple.extend(edge, radius - length));
                    self.stats.candidates_generated += 1;
                }
                if radius < length && !(self.retire_exhausted && visited) {
                    keep = true;
                }
            }

            if keep {
                still_active.push(id);
            }
        }

        self.active = still_active;
        incoming
    }

    /// Filter one node's candidates and accept the survivors.
    fn admit(&mut self, node: NodeIndex, candidates: Vec<Candidate>) {
        let survivors = filter_candidates(
            candidates,
            self.ceilings.ceiling(node),
            &self.archive,
            &self.omega[node],
            &self.ripples,
            &mut self.stats,
        );

        let at_destination = node == self.destination;
        for candidate in survivors {
            let id = self.ripples.len();
            if at_destination {
                self.archive.push(candidate.objective.clone());
                self.stats.destination_arrivals += 1;
            } else {
                self.active.push(id);
            }
            self.omega[node].push(id);
            self.ripples.push(candidate.into_ripple(id));
            self.stats.ripples_created += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    #[cfg(test)]
    pub(crate) fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[cfg(test)]
    pub(crate) fn step(&mut self) -> bool {
        if self.active.is_empty() {
            return false;
        }
        self.tick();
        true
    }
}
