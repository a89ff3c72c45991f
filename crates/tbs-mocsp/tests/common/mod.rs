//! Shared test infrastructure.
//!
//! - `fixtures`: Deterministic networks (hand-built and seeded random)
//! - `helpers`: Exhaustive reference search and result-set assertions

pub mod fixtures;
