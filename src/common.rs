//! Defines some common functions used in this library.

/// Defines some checker functions.
pub mod checkers;

/// Defines some useful functions such as normalization.
pub mod utils;
