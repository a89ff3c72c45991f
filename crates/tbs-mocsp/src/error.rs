//! Error types for MOCSP search operations.
//!
//! Every failure the engine can report is a variant of [`MocspError`]:
//! malformed networks are rejected when the [`Network`](crate::network::Network)
//! is built, malformed queries when a search starts. An unreachable destination
//! is NOT an error - it yields an empty result set.

use thiserror::Error;

/// Result type alias for MOCSP operations.
pub type MocspResult<T> = Result<T, MocspError>;

/// Error type for all network, query and configuration failures.
///
/// All errors fail fast with enough context to locate the offending input.
#[derive(Error, Debug)]
pub enum MocspError {
    // ========== Network Structure Errors ==========
    /// Node keys are not the dense range `0..N-1`.
    #[error("Node {0} is missing: graph keys must be the dense range 0..N-1")]
    MissingNode(usize),

    /// An edge points at a node that is not a key of the graph.
    #[error("Edge {from} -> {to} targets a node that is not in the graph")]
    NodeNotFound { from: usize, to: usize },

    /// Objective or constraint vector length differs from the rest of the graph.
    #[error("Edge {from} -> {to}: {vector} vector has {actual} components, expected {expected}")]
    DimensionMismatch {
        from: usize,
        to: usize,
        vector: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A cost component is negative, NaN or infinite.
    #[error("Edge {from} -> {to}: invalid cost component {value} (must be finite and >= 0)")]
    InvalidCost { from: usize, to: usize, value: f64 },

    // ========== Query Errors ==========
    /// Query endpoint outside `0..node_count`.
    #[error("Node {node} is out of range (graph has {node_count} nodes)")]
    NodeOutOfRange { node: usize, node_count: usize },

    /// The source has no outgoing edge, so F and C cannot be determined.
    #[error("Source node {0} has no outgoing edges: cannot determine cost dimensionality")]
    SourceHasNoEdges(usize),

    /// Budget length differs from the constraint dimension C.
    #[error("Constraint budget has {actual} components, expected {expected}")]
    BudgetDimensionMismatch { expected: usize, actual: usize },

    /// Budget component is NaN.
    #[error("Invalid constraint budget component: {0}")]
    InvalidBudget(f64),

    /// No objective dimension has a strictly positive minimum edge value.
    #[error("No objective dimension has a positive minimum: ripple spreading speed would be zero")]
    DegenerateSpreadingRate,

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for MocspError {
    fn from(err: toml::de::Error) -> Self {
        MocspError::ConfigParse(err.to_string())
    }
}

static_assertions::assert_impl_all!(MocspError: Send, Sync, std::error::Error);
