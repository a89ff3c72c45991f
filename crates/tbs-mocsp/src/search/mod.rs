//! Time-based ripple-spreading search.
//!
//! Ripples spread from the source at a shared speed. A partial path reaches a
//! node when its wave front crosses the node's (surrogate) distance, so paths
//! are discovered in roughly increasing surrogate length, and every node keeps
//! only the partial paths that no other partial path beats on all objectives
//! and constraints at once.
//!
//! # Pipeline
//!
//! 1. Rate selection ([`crate::rate`])
//! 2. Constraint ceilings ([`crate::bounds`])
//! 3. Wavefront simulation with per-node frontier filtering
//! 4. Objective-only Pareto extraction at the destination
//!
//! # Example
//!
//! ```
//! use tbs_mocsp::network::Network;
//! use tbs_mocsp::search::{Query, TbsSearch};
//!
//! let network = Network::builder(3)
//!     .edge(0, 1, vec![1.0, 4.0], vec![1.0])
//!     .edge(1, 2, vec![1.0, 4.0], vec![1.0])
//!     .edge(0, 2, vec![5.0, 1.0], vec![3.0])
//!     .build()?;
//!
//! let outcome = TbsSearch::new(&network).run(&Query::new(0, 2, vec![3.0]))?;
//! assert_eq!(outcome.paths.len(), 2);
//! # Ok::<(), tbs_mocsp::MocspError>(())
//! ```

mod extract;
mod frontier;
mod session;
mod types;


pub use types::{ParetoPath, Query, Ripple, RippleId, SearchOutcome, SearchStats};

use crate::bounds::compute_ceilings;
use crate::config::SearchConfig;
use crate::error::{MocspError, MocspResult};
use crate::network::{Network, RawGraph};
use crate::rate::select_rate;

use self::session::SearchSession;

/// Ripple-spreading search over a validated network.
#[derive(Debug, Clone)]
pub struct TbsSearch<'a> {
    network: &'a Network,
    config: SearchConfig,
}

impl<'a> TbsSearch<'a> {
    /// Search with the default configuration.
    #[must_use]
    pub fn new(network: &'a Network) -> Self {
        Self {
            network,
            config: SearchConfig::default(),
        }
    }

    /// Builder: replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one query.
    ///
    /// # Returns
    /// * `Ok(SearchOutcome)` - Pareto set (possibly empty) plus run metadata
    /// * `Err(MocspError::NodeOutOfRange)` - source or destination not in the network
    /// * `Err(MocspError::SourceHasNoEdges)` - dimensionality cannot be determined
    /// * `Err(MocspError::BudgetDimensionMismatch)` / `InvalidBudget` - bad budget
    /// * `Err(MocspError::DegenerateSpreadingRate)` / `InvalidConfig` - no usable
    ///   surrogate dimension
    pub fn run(&self, query: &Query) -> MocspResult<SearchOutcome> {
        self.validate_query(query)?;
        self.config.validate(self.network.objective_dims())?;

        let rate = select_rate(self.network, self.config.surrogate_dimension)?;

        if query.source == query.destination {
            let stats = SearchStats {
                ripples_created: 1,
                peak_active: 1,
                pareto_paths: 1,
                ..SearchStats::default()
            };
            let origin = Ripple::origin(
                query.source,
                self.network.objective_dims(),
                self.network.constraint_dims(),
            );
            return Ok(SearchOutcome {
                paths: vec![ParetoPath::from(&origin)],
                stats,
                speed: rate.speed,
                surrogate_dimension: rate.dimension,
            });
        }

        let ceilings = compute_ceilings(
            self.network,
            query.destination,
            &query.budget,
            self.config.parallel_bounds,
        );

        let zero = vec![0.0; self.network.constraint_dims()];
        if !ceilings.admits(query.source, &zero) {
            tracing::debug!(
                source = query.source,
                destination = query.destination,
                "Destination unreachable within budget, skipping simulation"
            );
            return Ok(SearchOutcome {
                paths: Vec::new(),
                stats: SearchStats::default(),
                speed: rate.speed,
                surrogate_dimension: rate.dimension,
            });
        }

        tracing::debug!(
            source = query.source,
            destination = query.destination,
            nodes = self.network.node_count(),
            edges = self.network.edge_count(),
            speed = rate.speed,
            surrogate_dimension = rate.dimension,
            "Starting ripple-spreading search"
        );

        let session = SearchSession::new(
            self.network,
            &rate,
            &ceilings,
            query.source,
            query.destination,
            self.config.retire_exhausted_ripples,
        );
        let (paths, stats) = session.run();

        tracing::debug!(
            ticks = stats.ticks,
            ripples = stats.ripples_created,
            candidates = stats.candidates_generated,
            pareto_paths = stats.pareto_paths,
            "Search complete"
        );

        Ok(SearchOutcome {
            paths,
            stats,
            speed: rate.speed,
            surrogate_dimension: rate.dimension,
        })
    }

    fn validate_query(&self, query: &Query) -> MocspResult<()> {
        let node_count = self.network.node_count();
        for node in [query.source, query.destination] {
            if !self.network.contains(node) {
                return Err(MocspError::NodeOutOfRange { node, node_count });
            }
        }

        if self.network.neighbors(query.source).is_empty() {
            return Err(MocspError::SourceHasNoEdges(query.source));
        }

        let expected = self.network.constraint_dims();
        if query.budget.len() != expected {
            return Err(MocspError::BudgetDimensionMismatch {
                expected,
                actual: query.budget.len(),
            });
        }
        if let Some(&bad) = query.budget.iter().find(|b| b.is_nan()) {
            return Err(MocspError::InvalidBudget(bad));
        }

        Ok(())
    }
}

/// Compute the Pareto-optimal feasible paths from `source` to `destination`.
///
/// Validates `graph`, then runs a search with the default configuration.
///
/// # Arguments
/// * `graph` - node -> neighbor -> (objective, constraint) costs
/// * `source` - Start node
/// * `destination` - Target node
/// * `budget` - Inclusive upper bound per constraint dimension
///
/// # Returns
/// The non-dominated feasible paths; empty if none exists.
pub fn solve(
    graph: &RawGraph,
    source: usize,
    destination: usize,
    budget: &[f64],
) -> MocspResult<Vec<ParetoPath>> {
    solve_with_config(graph, source, destination, budget, SearchConfig::default())
}

/// [`solve`] with an explicit configuration.
pub fn solve_with_config(
    graph: &RawGraph,
    source: usize,
    destination: usize,
    budget: &[f64],
    config: SearchConfig,
) -> MocspResult<Vec<ParetoPath>> {
    let network = Network::new(graph.clone())?;
    let query = Query::new(source, destination, budget.to_vec());
    let outcome = TbsSearch::new(&network).with_config(config).run(&query)?;
    Ok(outcome.paths)
}
