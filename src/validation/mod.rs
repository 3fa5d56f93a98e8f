// src/validation/mod.rs

//! Provides functions to validate a `QubitState` before measurement.

use crate::core::constants::quoin_constants::NORM_TOLERANCE;
use crate::core::{QubitState, QuoinError};

/// Checks if the state vector is normalized (sum of squared amplitudes ≈ 1.0).
///
/// # Arguments
/// * `state` - The `QubitState` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to the crate
///   normalization tolerance (`1e-6`) when `None`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QuoinError::InvalidState)` if normalization fails.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), QuoinError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QuoinError::InvalidState {
            message: format!(
                "State vector normalization failed. |a|^2 + |b|^2 = {} (Deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Performs the validation checks required before a state can be sampled.
/// Currently normalization only; uses the default tolerance unless specified.
///
/// # Returns
/// * `Ok(())` if all checks pass.
/// * `Err(QuoinError::InvalidState)` if any check fails.
pub fn validate_state(state: &QubitState, norm_tolerance: Option<f64>) -> Result<(), QuoinError> {
    check_normalization(state, norm_tolerance)?;
    Ok(())
}
