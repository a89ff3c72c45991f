//! Feasibility bound propagation.
//!
//! For every constraint dimension, a reverse Dijkstra from the destination
//! yields the cheapest possible remaining cost of each node on that dimension.
//! Subtracting it from the budget gives the node's *constraint ceiling*: the
//! largest already-accumulated cost a partial path may carry there and still
//! finish within budget.
//!
//! # Pruning Strength
//!
//! Each dimension is bounded independently, so the test is necessary but not
//! sufficient: it never rejects a path that can still complete feasibly, but
//! it may keep one that cannot.

mod ceiling;
mod dijkstra;
mod node;


pub use ceiling::{compute_ceilings, ConstraintCeilings};
pub use dijkstra::{reverse_shortest_costs, UNREACHABLE};
