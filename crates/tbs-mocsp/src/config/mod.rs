//! Search configuration.
//!
//! [`SearchConfig`] tunes how a query is executed without changing which
//! paths are returned. It can be built in code or loaded from TOML; every
//! field has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! retire_exhausted_ripples = true
//! parallel_bounds = false
//! surrogate_dimension = 1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MocspError, MocspResult};


/// Execution parameters for a ripple-spreading search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Retire a ripple once every neighbor not already on its path has been
    /// reached (default: true).
    ///
    /// When false a ripple stays active until its radius passes every
    /// neighbor, including ones it can never expand into. Results are the
    /// same either way; retiring early just ends the simulation sooner.
    pub retire_exhausted_ripples: bool,

    /// Compute per-dimension constraint bounds on the rayon thread pool
    /// (default: false).
    pub parallel_bounds: bool,

    /// Force the objective dimension that drives simulated time
    /// (default: None = most uniform dimension).
    pub surrogate_dimension: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            retire_exhausted_ripples: true,
            parallel_bounds: false,
            surrogate_dimension: None,
        }
    }
}

impl SearchConfig {
    /// Builder: set early ripple retirement.
    #[must_use]
    pub fn retire_exhausted_ripples(mut self, retire: bool) -> Self {
        self.retire_exhausted_ripples = retire;
        self
    }

    /// Builder: set parallel bound computation.
    #[must_use]
    pub fn parallel_bounds(mut self, parallel: bool) -> Self {
        self.parallel_bounds = parallel;
        self
    }

    /// Builder: force the surrogate objective dimension.
    #[must_use]
    pub fn surrogate_dimension(mut self, dimension: usize) -> Self {
        self.surrogate_dimension = Some(dimension);
        self
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> MocspResult<Self> {
        let config: SearchConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> MocspResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            MocspError::InvalidConfig(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate against the objective dimensionality of a network.
    ///
    /// # Errors
    /// * `InvalidConfig` - `surrogate_dimension` is not below `objective_dims`
    pub fn validate(&self, objective_dims: usize) -> MocspResult<()> {
        if let Some(dim) = self.surrogate_dimension {
            if dim >= objective_dims {
                return Err(MocspError::InvalidConfig(format!(
                    "surrogate_dimension {} out of range for {} objective dimensions",
                    dim, objective_dims
                )));
            }
        }
        Ok(())
    }
}
