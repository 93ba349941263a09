// src/validation/mod.rs

//! Provides functions to validate a `QubitState` against its invariants.
//!
//! These are diagnostic and test tools. The engine never repairs drift at
//! runtime; a failed check means a bug, not a recoverable condition.

use crate::core::{QubitState, QvisError};

// Default tolerance values (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the amplitude pair is normalized (`a0^2 + a1^2` ≈ 1.0).
///
/// # Arguments
/// * `state` - The `QubitState` to check.
/// * `tolerance` - Allowed deviation from 1.0 (defaults to 1e-9).
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QvisError::Normalization)` if normalization fails.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), QvisError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let (a0, a1) = state.amplitudes();
    let norm_sq = a0 * a0 + a1 * a1;
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QvisError::Normalization {
            message: format!(
                "amplitude normalization failed: a0^2 + a1^2 = {} (deviation > {})",
                norm_sq, effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}

/// Checks that a collapsed state is exactly a basis vector.
///
/// Collapse assigns the exact constants `(1.0, 0.0)` or `(0.0, 1.0)`, so the
/// comparison here is exact, not tolerance-based. Superposed states pass
/// trivially.
///
/// # Returns
/// * `Ok(())` if the state is superposed, or collapsed onto an exact basis
///   vector.
/// * `Err(QvisError::Normalization)` otherwise.
pub fn check_collapse_consistency(state: &QubitState) -> Result<(), QvisError> {
    if !state.is_collapsed() {
        return Ok(());
    }
    let (a0, a1) = state.amplitudes();
    let is_basis = (a0 == 1.0 && a1 == 0.0) || (a0 == 0.0 && a1 == 1.0);
    if is_basis {
        Ok(())
    } else {
        Err(QvisError::Normalization {
            message: format!(
                "collapsed state is not a basis vector: ({}, {})",
                a0, a1
            ),
        })
    }
}

/// Runs every invariant check on the state.
///
/// # Arguments
/// * `state` - The `QubitState` to validate.
/// * `norm_tolerance` - Optional allowed deviation from 1.0 for normalization.
///
/// # Returns
/// * `Ok(())` if all checks pass.
/// * `Err(QvisError::Normalization)` if any check fails.
pub fn validate_state(state: &QubitState, norm_tolerance: Option<f64>) -> Result<(), QvisError> {
    check_normalization(state, norm_tolerance)?;
    check_collapse_consistency(state)
}
