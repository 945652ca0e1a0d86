//! Constants shared by the modules of this crate.

/// The feature value that represents a missing grade.
pub const MISSING: i32 = -1;

/// The number of grades, `1, 2, ..., 8`.
pub const N_GRADES: usize = 8;

/// Error rates equal to `1` are perturbed by this amount
/// so that `ln((1 - e) / e)` stays finite.
/// The same amount caps the weight of a perfect hypothesis.
pub const ERROR_PERTURBATION: f64 = 1e-5;

/// Tolerance for `sum(weights) == 1`.
pub const SIMPLEX_TOLERANCE: f64 = 1e-5;

/// The number of boosting rounds set as default.
pub const DEFAULT_ROUNDS: usize = 100;

/// `Logger` prints its status every `DEFAULT_PRINT_EVERY` rounds.
pub const DEFAULT_PRINT_EVERY: usize = 1;
