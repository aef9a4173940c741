//! Input validation shared by the solvers.

use crate::error::{LabError, Result};

/// Require a finite value strictly greater than zero.
pub fn require_positive(param: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LabError::invalid_input(param, value, "a finite value greater than zero"))
    }
}

/// Require a finite value greater than or equal to zero.
pub fn require_non_negative(param: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LabError::invalid_input(param, value, "a finite value of at least zero"))
    }
}

/// Require a finite value of any sign.
pub fn require_finite(param: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LabError::invalid_input(param, value, "a finite number"))
    }
}

/// Reject derived quantities that overflowed.
pub fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LabError::non_finite(quantity))
    }
}
