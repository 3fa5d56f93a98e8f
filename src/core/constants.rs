//! Numeric tolerances shared across the crate.

/// Tolerances for floating-point checks on amplitude vectors.
pub mod quoin_constants {
    /// Allowed deviation of `|a|^2 + |b|^2` from 1 before a state is
    /// rejected at measurement time.
    pub const NORM_TOLERANCE: f64 = 1e-6;
    /// Tighter tolerance used when asserting gate algebra identities.
    pub const STRICT_TOLERANCE: f64 = 1e-9;
}
