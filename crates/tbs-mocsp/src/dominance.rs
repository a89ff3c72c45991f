//! Pareto dominance.
//!
//! `a` dominates `b` when `a` is no worse than `b` in every component and
//! strictly better in at least one. Equal vectors never dominate each other.
//! Vectors of different length are compared over their common prefix.

/// Whether `a` Pareto-dominates `b`.
#[inline]
#[must_use]
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    dominates_iter(a.iter().zip(b))
}

/// Whether `(a_objective ‖ a_constraint)` dominates `(b_objective ‖ b_constraint)`.
///
/// Equivalent to [`dominates`] on the concatenated vectors, without
/// allocating them.
#[inline]
#[must_use]
pub fn jointly_dominates(
    a_objective: &[f64],
    a_constraint: &[f64],
    b_objective: &[f64],
    b_constraint: &[f64],
) -> bool {
    dominates_iter(
        a_objective
            .iter()
            .zip(b_objective)
            .chain(a_constraint.iter().zip(b_constraint)),
    )
}

#[inline]
fn dominates_iter<'a>(pairs: impl Iterator<Item = (&'a f64, &'a f64)>) -> bool {
    let mut strictly_better = false;
    for (a, b) in pairs {
        if a > b {
            return false;
        }
        if a < b {
            strictly_better = true;
        }
    }
    strictly_better
}
