//! Resistance of a wire relative to a reference wire.
//!
//! The lab scales a reference conductor by its length and by its thickness.
//! Resistance grows with length and falls with the square of the thickness
//! multiplier: `R ∝ L / A²`.

use crate::circuit::{ensure_finite, require_positive, WireParams};
use crate::error::Result;

/// Solved wire lab.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireSolution {
    /// Resistance as a multiple of the reference wire
    pub relative_resistance: f64,
}

/// Relative resistance `length / area²`.
///
/// Both multipliers must be positive; a result that overflows is reported as
/// [`LabError::NonFinite`](crate::LabError::NonFinite).
pub fn solve_wire(params: &WireParams) -> Result<WireSolution> {
    let length = require_positive("length", params.length)?;
    let area = require_positive("area", params.area)?;

    Ok(WireSolution {
        relative_resistance: ensure_finite("relative_resistance", length / (area * area))?,
    })
}
