//! Surrogate dimension and speed selection.

use crate::error::{MocspError, MocspResult};
use crate::network::Network;

use super::types::{DimensionRange, SpreadingRate};

/// Compute the `[min, max]` range of every objective dimension.
///
/// Returns an empty vector for an edgeless network.
pub fn dimension_ranges(network: &Network) -> Vec<DimensionRange> {
    let dims = network.objective_dims();
    let mut ranges = vec![
        DimensionRange {
            min: f64::INFINITY,
            max: 0.0,
        };
        dims
    ];

    for (_, edge) in network.edges() {
        for (range, &value) in ranges.iter_mut().zip(&edge.cost.objective) {
            range.min = range.min.min(value);
            range.max = range.max.max(value);
        }
    }

    if network.edge_count() == 0 {
        ranges.clear();
    }
    ranges
}

/// Pick the surrogate dimension and spreading speed.
///
/// # Arguments
/// * `network` - Validated network
/// * `forced_dimension` - Use this objective dimension instead of the most
///   uniform one
///
/// # Returns
/// * `Ok(SpreadingRate)` - Speed, chosen dimension and scaled edge lengths
/// * `Err(MocspError::DegenerateSpreadingRate)` - Every dimension has a zero
///   minimum, so ripples could never advance
/// * `Err(MocspError::InvalidConfig)` - `forced_dimension` is out of range or
///   has a zero minimum
pub fn select_rate(network: &Network, forced_dimension: Option<usize>) -> MocspResult<SpreadingRate> {
    let ranges = dimension_ranges(network);

    let dimension = match forced_dimension {
        Some(dim) => {
            let range = ranges.get(dim).ok_or_else(|| {
                MocspError::InvalidConfig(format!(
                    "surrogate_dimension {} out of range for {} objective dimensions",
                    dim,
                    ranges.len()
                ))
            })?;
            if range.ratio().is_none() {
                return Err(MocspError::InvalidConfig(format!(
                    "surrogate_dimension {} has a zero minimum edge value",
                    dim
                )));
            }
            dim
        }
        None => most_uniform(&ranges).ok_or(MocspError::DegenerateSpreadingRate)?,
    };

    let speed = ranges[dimension].min;
    let scaled = (0..network.node_count())
        .map(|node| {
            network
                .neighbors(node)
                .iter()
                .map(|edge| edge.cost.objective[dimension])
                .collect()
        })
        .collect();

    tracing::debug!(
        dimension,
        speed,
        ratio = ranges[dimension].max / speed,
        "Spreading rate selected"
    );

    Ok(SpreadingRate {
        speed,
        dimension,
        scaled,
    })
}

/// Index of the smallest finite ratio; the first index wins ties.
fn most_uniform(ranges: &[DimensionRange]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (dim, range) in ranges.iter().enumerate() {
        if let Some(ratio) = range.ratio() {
            if best.map_or(true, |(_, current)| ratio < current) {
                best = Some((dim, ratio));
            }
        }
    }
    best.map(|(dim, _)| dim)
}
