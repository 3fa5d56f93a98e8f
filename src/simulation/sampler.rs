// src/simulation/sampler.rs

//! Measurement sampling over a prepared qubit state.
//!
//! Sampling never mutates the state: each shot is an independent draw
//! from the same prepared distribution, modeling independent circuit
//! executions rather than one collapsing run repeated in place.

use crate::core::{NORM_TOLERANCE, QubitState, QuoinError};
use crate::simulation::RunResult;
use crate::validation::check_normalization;
use rand::Rng;

/// Collapses a state to a classical bit using the supplied random source.
///
/// Computes `p0 = |a|^2`, draws a uniform `r` in `[0, 1)` and returns 0
/// if `r < p0`, else 1. The random source is injected so callers (and
/// test suites) control seeding and can assert exact outcome sequences.
///
/// # Errors
/// Returns [`QuoinError::InvalidState`] if the amplitude magnitudes do
/// not sum to ~1 within the crate normalization tolerance.
pub fn sample(state: &QubitState, rng: &mut impl Rng) -> Result<u8, QuoinError> {
    check_normalization(state, Some(NORM_TOLERANCE))?;

    let (p0, _p1) = state.probabilities();
    let r: f64 = rng.random(); // Generates [0.0, 1.0)
    if r < p0 { Ok(0) } else { Ok(1) }
}

/// Draws `shots` independent measurement outcomes from `state` and
/// aggregates them into a [`RunResult`].
///
/// `shots = 0` yields an empty result. The same state is sampled for
/// every shot; it is never collapsed between draws.
///
/// # Errors
/// Returns [`QuoinError::InvalidState`] if the state fails the
/// normalization check.
pub fn sample_counts(
    state: &QubitState,
    shots: u64,
    rng: &mut impl Rng,
) -> Result<RunResult, QuoinError> {
    // Validate once up front so a zero-shot run on a malformed state
    // still fails loudly instead of returning an empty result.
    check_normalization(state, Some(NORM_TOLERANCE))?;

    let mut result = RunResult::new();
    let (p0, _p1) = state.probabilities();
    for _ in 0..shots {
        let r: f64 = rng.random();
        result.record(if r < p0 { 0 } else { 1 });
    }
    Ok(result)
}
